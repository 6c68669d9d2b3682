use crate::host::SaveOutcome;
use owo_colors::OwoColorize;

/// 保存結果 1 件分の表示行
pub fn format_outcome(outcome: &SaveOutcome) -> String {
    match outcome {
        SaveOutcome::Written { path, bytes } => format!(
            "{} Saved {} ({} bytes)",
            "✓".green(),
            path.display().to_string().cyan(),
            bytes
        ),
        SaveOutcome::Failed { filename, error } => {
            format!("{} Failed to save {}: {}", "✗".red(), filename, error.red())
        }
    }
}

/// 保存結果の一覧を表示し、失敗件数を返す
pub fn print_outcomes(outcomes: &[SaveOutcome]) -> usize {
    if outcomes.is_empty() {
        println!("{} No files exported", "•".yellow());
        return 0;
    }

    for outcome in outcomes {
        println!("{}", format_outcome(outcome));
    }
    outcomes
        .iter()
        .filter(|o| matches!(o, SaveOutcome::Failed { .. }))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn written_outcome_mentions_path_and_size() {
        let line = format_outcome(&SaveOutcome::Written {
            path: PathBuf::from("out/table.csv"),
            bytes: 42,
        });
        assert!(line.contains("out/table.csv"));
        assert!(line.contains("42 bytes"));
    }

    #[test]
    fn failed_outcome_mentions_error() {
        let line = format_outcome(&SaveOutcome::Failed {
            filename: "t.csv".to_string(),
            error: "denied".to_string(),
        });
        assert!(line.contains("t.csv"));
        assert!(line.contains("denied"));
    }

    #[test]
    fn print_outcomes_counts_failures() {
        let outcomes = vec![
            SaveOutcome::Written {
                path: PathBuf::from("a.csv"),
                bytes: 1,
            },
            SaveOutcome::Failed {
                filename: "b.csv".to_string(),
                error: "x".to_string(),
            },
        ];
        assert_eq!(print_outcomes(&outcomes), 1);
    }
}
