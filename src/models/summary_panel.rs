use strum_macros::EnumIter;

#[derive(Clone, Copy, Debug, Default, EnumIter, Eq, PartialEq)]
pub enum SummaryPanel {
    #[default]
    Collapsed,
    Expanded,
}

impl SummaryPanel {
    pub fn toggled(self) -> Self {
        match self {
            SummaryPanel::Collapsed => SummaryPanel::Expanded,
            SummaryPanel::Expanded => SummaryPanel::Collapsed,
        }
    }

    pub fn is_expanded(&self) -> bool {
        *self == SummaryPanel::Expanded
    }

    pub fn indicator(&self) -> &'static str {
        match self {
            SummaryPanel::Collapsed => "▲",
            SummaryPanel::Expanded => "▼",
        }
    }
}
