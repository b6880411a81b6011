// coursenav: browse course lessons listed in a GitHub repository.
// Entry point wiring configuration, logging, and the selected command.

mod app;
mod cache;
mod catalog;
mod config;
mod error;
mod github;
mod lessons;
mod logging;
mod page;
mod site;
mod state;
mod ui;

use clap::Parser;
use tracing::{debug, info};

use crate::app::App;
use crate::config::{Cli, Command};
use crate::error::Result;
use crate::github::GitHubClient;
use crate::page::{CONTENT_ID, Document, INTRO_ID, NEXT_ID, PREV_ID};
use crate::site::CourseSite;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.command.logs_to_stderr() {
        logging::init_stderr()?;
    }

    match &cli.command {
        Command::Browse { course, lesson } => browse(&cli, course, lesson.as_deref()).await,
        Command::Render { course, lesson } => render(&cli, course, lesson.as_deref()).await,
        Command::Courses => {
            debug!(count = catalog::all().len(), "listing courses");
            for course in catalog::all() {
                println!("{:<12} {}", course.id, course.title);
            }
            Ok(())
        }
    }
}

/// Interactive terminal browser.
async fn browse(cli: &Cli, course_id: &str, lesson: Option<&str>) -> Result<()> {
    let _guard = match cache::paths::log_dir() {
        Some(dir) => Some(logging::init_file(&dir)?),
        None => None,
    };

    let repo_path = cli.repo_path_for(course_id);
    info!(course_id, %repo_path, api_base = %cli.api_base, "starting browser");

    let client = GitHubClient::new(&cli.api_base, cli.timeout())?;
    let mut app = App::new(CourseSite::new(client), course_id, &repo_path);

    let mut terminal = ratatui::init();
    let result = app.run(&mut terminal, lesson).await;
    ratatui::restore();

    Ok(result?)
}

/// Print the rendered page as an HTML fragment.
async fn render(cli: &Cli, course_id: &str, lesson: Option<&str>) -> Result<()> {
    let repo_path = cli.repo_path_for(course_id);
    let client = GitHubClient::new(&cli.api_base, cli.timeout())?;
    let mut site = CourseSite::new(client);

    let page = match lesson {
        Some(lesson) => {
            let mut page = Document::lesson_page();
            site.setup_navigation(&mut page, course_id, lesson, PREV_ID, NEXT_ID, &repo_path)
                .await;
            page
        }
        None => {
            let mut page = Document::course_page();
            site.render(&mut page, course_id, CONTENT_ID, INTRO_ID, &repo_path)
                .await;
            page
        }
    };

    print!("{}", page.to_html());
    Ok(())
}
