use std::sync::Arc;

use virtualfridge_core::application::VirtualFridgeService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: VirtualFridgeService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: VirtualFridgeService) -> Self {
        Self { args, service }
    }
}
