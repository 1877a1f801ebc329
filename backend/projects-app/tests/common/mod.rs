#![allow(dead_code)]

//! Test infrastructure for menu tests

use projects_app::{Console, Menu, ProjectService, ServiceError, ServiceResult};
use projects_core::{ErrorLocation, Project};
use projects_db::DbError;

use std::panic::Location;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

pub const MENU_LISTING: &str = "\nThese are the available selections. Press the ENTER key to quit:\n   1) Add a project\nEnter a menu selection: ";
pub const EXIT_MESSAGE: &str = "\nExiting the menu.\n";

pub type ScriptedConsole<'a> = Console<&'a [u8], Vec<u8>>;

/// Service that records every submitted project and assigns sequential ids
#[derive(Default)]
pub struct RecordingProjectService {
    submitted: Mutex<Vec<Project>>,
}

impl RecordingProjectService {
    pub fn submitted(&self) -> Vec<Project> {
        self.submitted.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProjectService for RecordingProjectService {
    async fn add_project(&self, project: Project) -> ServiceResult<Project> {
        let mut submitted = self.submitted.lock().unwrap();
        submitted.push(project.clone());
        Ok(project.with_id(submitted.len() as i64))
    }
}

/// Service whose store always fails
pub struct FailingProjectService;

#[async_trait]
impl ProjectService for FailingProjectService {
    async fn add_project(&self, _project: Project) -> ServiceResult<Project> {
        Err(ServiceError::from(DbError::Initialization {
            message: "store unavailable".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }))
    }
}

/// Run the standard menu over `input` and return everything written
pub async fn run_menu(input: &str, service: Arc<dyn ProjectService>) -> String {
    let console = Console::new(input.as_bytes(), Vec::new());
    let mut menu = Menu::new(console, service);
    menu.run().await.expect("menu loop failed");
    output_of(menu.into_console())
}

pub fn output_of(console: ScriptedConsole<'_>) -> String {
    let (_, output) = console.into_inner();
    String::from_utf8(output).unwrap()
}
