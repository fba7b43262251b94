/// Lifecycle events published by the application-update channel.
///
/// Publisher states outside this set are ignored upstream and never reach
/// the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateEvent {
    CheckingForUpdate,
    DownloadingPackage,
    InstallingUpdate,
    UpToDate,
    UpdateInstalled,
}

impl UpdateEvent {
    /// Whether rendering this event needs the version label from the
    /// channel's asynchronous metadata lookup.
    pub fn needs_label(self) -> bool {
        matches!(
            self,
            UpdateEvent::DownloadingPackage
                | UpdateEvent::InstallingUpdate
                | UpdateEvent::UpdateInstalled
        )
    }
}

/// Renders an update event as the status-bar sentence.
///
/// Total over all events; `label` is only read by the label-bearing ones.
pub fn status_line(event: UpdateEvent, label: &str) -> String {
    match event {
        UpdateEvent::CheckingForUpdate => "Checking for update.".to_string(),
        UpdateEvent::DownloadingPackage => format!("Downloading package {label}."),
        UpdateEvent::InstallingUpdate => format!("Installing update {label}."),
        UpdateEvent::UpToDate => "Up-to-date.".to_string(),
        UpdateEvent::UpdateInstalled => format!("Update {label} installed."),
    }
}
