use crate::model::DailyChangeSet;

pub fn format_report(changeset: &DailyChangeSet) -> String {
    let mut lines: Vec<String> = Vec::new();
    for block in &changeset.blocks {
        lines.push(block.date.clone());
        for change in &block.changes {
            lines.push(format!("- {change}"));
        }
        lines.push(String::new());
    }

    let mut report = lines.join("\n").trim_end().to_string();
    report.push('\n');
    report
}
