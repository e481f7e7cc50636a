use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

/// Convert exam schedule PDFs to JSON and manage their display title.
#[derive(Debug, Parser)]
#[command(name = "exam-schedule", about, version)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Extract the exam schedule from a PDF into a JSON file
    Convert {
        /// Path to the schedule PDF
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Path of the JSON file to write
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Table detection strategy
        #[arg(long, value_enum, default_value_t = TableStrategy::Lattice)]
        strategy: TableStrategy,

        /// Snap tolerance for aligning nearby edges (default: 3.0)
        #[arg(long, default_value_t = 3.0)]
        snap_tolerance: f64,

        /// Join tolerance for merging collinear edges (default: 3.0)
        #[arg(long, default_value_t = 3.0)]
        join_tolerance: f64,

        /// Text tolerance for assigning text to cells (default: 3.0)
        #[arg(long, default_value_t = 3.0)]
        text_tolerance: f64,

        /// Y positions of the table's horizontal rules, top-left origin (overrides --strategy)
        #[arg(long, value_name = "Y,...", value_delimiter = ',', requires = "columns")]
        rows: Vec<f64>,

        /// X positions of the table's vertical rules (overrides --strategy)
        #[arg(long, value_name = "X,...", value_delimiter = ',', requires = "rows")]
        columns: Vec<f64>,

        /// TOML file with the row layout template (x0, x1, base_offset, row_pitch, row_height)
        #[arg(long, value_name = "TEMPLATE")]
        layout: Option<PathBuf>,

        /// Password for encrypted PDFs
        #[arg(long)]
        password: Option<String>,
    },

    /// Set the exam name and semester shown by the schedule site
    SetTitle {
        /// Exam name portion (e.g. "MidTerm Exam")
        #[arg(value_name = "EXAM_NAME")]
        exam_name: String,

        /// Semester or term label (e.g. "Fall-2025")
        #[arg(value_name = "SEMESTER")]
        semester: String,

        /// Path to the exam data JSON file
        #[arg(short, long, value_name = "PATH", default_value = "exam_data.json")]
        file: PathBuf,
    },
}

/// Table detection strategy for CLI arguments.
#[derive(Debug, Clone, ValueEnum)]
pub enum TableStrategy {
    /// Detect tables using visible lines and rect edges
    Lattice,
    /// Detect tables from text alignment patterns
    Stream,
}

impl Cli {
    /// Log level filter implied by `-v` / `-q`; `None` defers to `RUST_LOG`.
    pub fn log_level(&self) -> Option<log::LevelFilter> {
        if self.quiet {
            return Some(log::LevelFilter::Error);
        }
        match self.verbose {
            0 => None,
            1 => Some(log::LevelFilter::Debug),
            _ => Some(log::LevelFilter::Trace),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_convert_with_paths() {
        let cli = Cli::parse_from(["exam-schedule", "convert", "schedule.pdf", "out.json"]);
        match cli.command {
            Commands::Convert {
                ref input,
                ref output,
                ..
            } => {
                assert_eq!(input, &PathBuf::from("schedule.pdf"));
                assert_eq!(output, &PathBuf::from("out.json"));
            }
            _ => panic!("expected Convert subcommand"),
        }
    }

    #[test]
    fn parse_convert_defaults() {
        let cli = Cli::parse_from(["exam-schedule", "convert", "in.pdf", "out.json"]);
        match cli.command {
            Commands::Convert {
                ref strategy,
                snap_tolerance,
                join_tolerance,
                text_tolerance,
                ref rows,
                ref columns,
                ref layout,
                ref password,
                ..
            } => {
                assert!(matches!(strategy, TableStrategy::Lattice));
                assert!(rows.is_empty() && columns.is_empty());
                assert_eq!(snap_tolerance, 3.0);
                assert_eq!(join_tolerance, 3.0);
                assert_eq!(text_tolerance, 3.0);
                assert!(layout.is_none());
                assert!(password.is_none());
            }
            _ => panic!("expected Convert subcommand"),
        }
    }

    #[test]
    fn parse_convert_with_all_options() {
        let cli = Cli::parse_from([
            "exam-schedule",
            "convert",
            "in.pdf",
            "out.json",
            "--strategy",
            "stream",
            "--snap-tolerance",
            "5.0",
            "--join-tolerance",
            "4.5",
            "--text-tolerance",
            "2",
            "--layout",
            "template.toml",
            "--password",
            "secret",
        ]);
        match cli.command {
            Commands::Convert {
                ref strategy,
                snap_tolerance,
                join_tolerance,
                text_tolerance,
                ref layout,
                ref password,
                ..
            } => {
                assert!(matches!(strategy, TableStrategy::Stream));
                assert_eq!(snap_tolerance, 5.0);
                assert_eq!(join_tolerance, 4.5);
                assert_eq!(text_tolerance, 2.0);
                assert_eq!(layout.as_deref(), Some(std::path::Path::new("template.toml")));
                assert_eq!(password.as_deref(), Some("secret"));
            }
            _ => panic!("expected Convert subcommand"),
        }
    }

    #[test]
    fn parse_explicit_grid() {
        let cli = Cli::parse_from([
            "exam-schedule",
            "convert",
            "in.pdf",
            "out.json",
            "--rows",
            "92,112,132.5",
            "--columns",
            "90,170",
        ]);
        match cli.command {
            Commands::Convert {
                ref rows,
                ref columns,
                ..
            } => {
                assert_eq!(rows, &vec![92.0, 112.0, 132.5]);
                assert_eq!(columns, &vec![90.0, 170.0]);
            }
            _ => panic!("expected Convert subcommand"),
        }
    }

    #[test]
    fn rows_without_columns_is_an_error() {
        let result =
            Cli::try_parse_from(["exam-schedule", "convert", "a.pdf", "b.json", "--rows", "92,112"]);
        assert!(result.is_err());
    }

    #[test]
    fn convert_requires_output() {
        let result = Cli::try_parse_from(["exam-schedule", "convert", "in.pdf"]);
        assert!(result.is_err());
    }

    #[test]
    fn convert_rejects_unknown_strategy() {
        let result =
            Cli::try_parse_from(["exam-schedule", "convert", "a.pdf", "b.json", "--strategy", "magic"]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_set_title_default_file() {
        let cli = Cli::parse_from(["exam-schedule", "set-title", "MidTerm Exam", "Fall-2025"]);
        match cli.command {
            Commands::SetTitle {
                ref exam_name,
                ref semester,
                ref file,
            } => {
                assert_eq!(exam_name, "MidTerm Exam");
                assert_eq!(semester, "Fall-2025");
                assert_eq!(file, &PathBuf::from("exam_data.json"));
            }
            _ => panic!("expected SetTitle subcommand"),
        }
    }

    #[test]
    fn parse_set_title_with_file() {
        for flag in ["--file", "-f"] {
            let cli = Cli::parse_from([
                "exam-schedule",
                "set-title",
                "Final Exam",
                "Summer-2025",
                flag,
                "data/exam_data.json",
            ]);
            match cli.command {
                Commands::SetTitle { ref file, .. } => {
                    assert_eq!(file, &PathBuf::from("data/exam_data.json"));
                }
                _ => panic!("expected SetTitle subcommand"),
            }
        }
    }

    #[test]
    fn set_title_requires_semester() {
        let result = Cli::try_parse_from(["exam-schedule", "set-title", "Final Exam"]);
        assert!(result.is_err());
    }

    #[test]
    fn verbosity_flags() {
        let cli = Cli::parse_from(["exam-schedule", "convert", "a.pdf", "b.json"]);
        assert_eq!(cli.log_level(), None);

        let cli = Cli::parse_from(["exam-schedule", "-v", "convert", "a.pdf", "b.json"]);
        assert_eq!(cli.log_level(), Some(log::LevelFilter::Debug));

        let cli = Cli::parse_from(["exam-schedule", "convert", "a.pdf", "b.json", "-vv"]);
        assert_eq!(cli.log_level(), Some(log::LevelFilter::Trace));

        let cli = Cli::parse_from(["exam-schedule", "set-title", "a", "b", "--quiet"]);
        assert_eq!(cli.log_level(), Some(log::LevelFilter::Error));
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["exam-schedule", "-q", "-v", "set-title", "a", "b"]);
        assert!(result.is_err());
    }

    #[test]
    fn missing_subcommand_is_an_error() {
        assert!(Cli::try_parse_from(["exam-schedule"]).is_err());
    }
}
