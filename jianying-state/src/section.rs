use strum::{AsRefStr, EnumIter, EnumString, IntoStaticStr};
use thiserror::Error;

/// Sections of the page that can be jumped to from the navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumString, AsRefStr, IntoStaticStr, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum SectionId {
    History,
    Story,
    Workshop,
}

impl SectionId {
    /// Element id of the section container.
    pub fn anchor(self) -> &'static str {
        self.into()
    }

    pub fn label(self) -> &'static str {
        match self {
            SectionId::History => "溯源 · 历史",
            SectionId::Story => "见影 · 故事",
            SectionId::Workshop => "匠心 · 工坊",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    #[error("anchor \"{0}\" was not found in the document")]
    AnchorNotFound(String),
}

/// Whatever hosts the rendered sections: the browser document in production.
pub trait SectionHost {
    fn scroll_to_anchor(&self, anchor: &str) -> Result<(), NavError>;
    fn scroll_to_top(&self);
}
