/// Open/closed flags for the create and edit surfaces. The two flags are independent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModalVisibility {
    create_open: bool,
    edit_open: bool,
}

impl ModalVisibility {
    pub fn create_open(&self) -> bool {
        self.create_open
    }

    pub fn edit_open(&self) -> bool {
        self.edit_open
    }

    /// Flips the create flag and returns the new value.
    pub fn toggle_create(&mut self) -> bool {
        self.create_open = !self.create_open;
        self.create_open
    }

    /// Flips the edit flag and returns the new value.
    pub fn toggle_edit(&mut self) -> bool {
        self.edit_open = !self.edit_open;
        self.edit_open
    }

    pub fn set_create_open(&mut self, open: bool) {
        self.create_open = open;
    }

    pub fn set_edit_open(&mut self, open: bool) {
        self.edit_open = open;
    }
}
