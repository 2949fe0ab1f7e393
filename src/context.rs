//! Application Context
//!
//! Shared handles provided via Leptos Context API: the reload trigger, the
//! injected service configuration and the Task Service client. The client is
//! `Rc`-backed and not `Send`, so it lives in arena storage (`LocalStorage`);
//! the context struct itself stays a plain `Copy` bundle of handles.

use std::rc::Rc;

use leptos::prelude::*;

use crate::api::TaskApi;
use crate::config::TaskServiceConfig;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload tasks from the service - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload tasks from the service - write
    set_reload_trigger: WriteSignal<u32>,
    config: StoredValue<TaskServiceConfig>,
    api: StoredValue<Rc<dyn TaskApi>, LocalStorage>,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        config: TaskServiceConfig,
        api: Rc<dyn TaskApi>,
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            config: StoredValue::new(config),
            api: StoredValue::new_local(api),
        }
    }

    /// Trigger a reload of the task list
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Injected service configuration (fixed user, base URL, delete policy)
    pub fn config(&self) -> TaskServiceConfig {
        self.config.get_value()
    }

    pub fn api(&self) -> Rc<dyn TaskApi> {
        self.api.get_value()
    }
}
