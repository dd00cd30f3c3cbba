// src/config/state.rs
use super::consts::TOP_N_DEFAULT;
use super::options::AppOptions;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Data,
    Rates,
    Statistics,
    TopCountries,
    Compare,
}

impl Tab {
    pub const ALL: [Tab; 5] = [Tab::Data, Tab::Rates, Tab::Statistics, Tab::TopCountries, Tab::Compare];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Data => "Data",
            Tab::Rates => "Recovery & death rates",
            Tab::Statistics => "Statistics",
            Tab::TopCountries => "Top countries",
            Tab::Compare => "Cases vs recovered",
        }
    }
}

#[derive(Clone, Debug)]
pub struct GuiState {
    /// "How many top-ranked countries to display"
    pub top_n: usize,

    /// Countries picked for the comparison chart, in pick order
    pub compare: Vec<String>,

    /// Narrows the country list in the side panel
    pub country_filter: String,

    pub current_tab: Tab,

    pub window_w: u32,
    pub window_h: u32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            top_n: TOP_N_DEFAULT,
            compare: Vec::new(),
            country_filter: s!(),
            current_tab: Tab::default(),
            window_w: 1200,
            window_h: 760,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
