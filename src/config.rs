// Command line and environment configuration.
// Every option can also be set through a COURSENAV_* environment variable.

use std::time::Duration;

use clap::{Parser, Subcommand};

use crate::github::client::DEFAULT_API_BASE;

/// Default repository path template; `{course}` is replaced by the course id.
pub const DEFAULT_REPO_PATH: &str = "codelearn-hub/courses/contents/{course}";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Parser, Debug)]
#[command(name = "coursenav", version, about)]
pub struct Cli {
    /// Base URL of the GitHub REST API.
    #[arg(long, env = "COURSENAV_API_BASE", default_value = DEFAULT_API_BASE, global = true)]
    pub api_base: String,

    /// Request timeout in seconds.
    #[arg(long, env = "COURSENAV_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS, global = true)]
    pub timeout_secs: u64,

    /// Contents path under /repos/, `{course}` is replaced by the course id.
    #[arg(long, env = "COURSENAV_REPO_PATH", default_value = DEFAULT_REPO_PATH, global = true)]
    pub repo_path: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Browse a course interactively.
    Browse {
        course: String,
        /// Open this lesson file right away.
        #[arg(long)]
        lesson: Option<String>,
    },
    /// Print the rendered course page (or lesson navigation) as HTML.
    Render {
        course: String,
        /// Render previous/next navigation for this lesson file instead.
        #[arg(long)]
        lesson: Option<String>,
    },
    /// List the built-in courses.
    Courses,
}

impl Command {
    /// Whether the command logs to stderr. The browser owns the terminal and
    /// logs to a file instead.
    pub fn logs_to_stderr(&self) -> bool {
        !matches!(self, Command::Browse { .. })
    }
}

impl Cli {
    /// Contents path for a course.
    pub fn repo_path_for(&self, course_id: &str) -> String {
        self.repo_path.replace("{course}", course_id)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
