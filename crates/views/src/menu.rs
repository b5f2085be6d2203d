use disclosure::{Disclosable, DisclosureController};
use shared::{
    domain::{CentreId, FolderId},
    protocol::CourseFolder,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    Link(String),
    DeleteFolder {
        folder_id: FolderId,
        centre_id: CentreId,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: &'static str,
    pub action: MenuAction,
}

/// Per-folder action menu on the course admin page.
#[derive(Debug)]
pub struct FolderMenu {
    folder_id: FolderId,
    centre_id: CentreId,
    deletable: bool,
    state: DisclosureController<FolderId>,
}

impl FolderMenu {
    pub fn new(folder: &CourseFolder) -> Self {
        Self {
            folder_id: folder.disclosure_id(),
            centre_id: folder.centre_id.clone(),
            deletable: folder.courses.is_empty(),
            state: DisclosureController::new(),
        }
    }

    pub fn open(&mut self) {
        self.state.open(self.folder_id.clone());
    }

    pub fn close(&mut self) {
        self.state.close();
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open(&self.folder_id)
    }

    pub fn entries(&self) -> Vec<MenuEntry> {
        let mut entries = vec![MenuEntry {
            label: "Edit",
            action: MenuAction::Link(format!(
                "/admin/course/{}/update?type=FOLDER",
                self.folder_id
            )),
        }];
        // Folders that still hold courses cannot be deleted.
        if self.deletable {
            entries.push(MenuEntry {
                label: "Delete",
                action: MenuAction::DeleteFolder {
                    folder_id: self.folder_id.clone(),
                    centre_id: self.centre_id.clone(),
                },
            });
        }
        entries
    }

    /// Entries currently on screen; none while the menu is closed.
    pub fn visible_entries(&self) -> Vec<MenuEntry> {
        if self.is_open() {
            self.entries()
        } else {
            Vec::new()
        }
    }
}
