/// Messages from background services to the GTK thread.
#[derive(Debug, Clone)]
pub enum AppEvent {
    ConfigReload,
}
