use std::sync::Arc;

use userhub_core::application::UserHubService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: UserHubService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: UserHubService) -> Self {
        Self { args, service }
    }
}
