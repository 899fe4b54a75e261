// src/domain/screen.rs

/// Which top-level screen the visitor is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Inventory,
    Drivers,
    Register,
    Financing,
}

/// Named navigation events; the only way the screen changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    GoHome,
    ViewInventory,
    FindDriver,
    BecomeDriver,
    GetFinancing,
}

impl NavEvent {
    /// The page route that fires each event.
    pub fn from_path(path: &str) -> Option<Self> {
        match path.trim_end_matches('/') {
            "" => Some(NavEvent::GoHome),
            "/inventory" => Some(NavEvent::ViewInventory),
            "/drivers" => Some(NavEvent::FindDriver),
            "/drivers/register" => Some(NavEvent::BecomeDriver),
            "/financing" => Some(NavEvent::GetFinancing),
            _ => None,
        }
    }
}

impl Screen {
    pub fn on(self, event: NavEvent) -> Screen {
        match event {
            NavEvent::GoHome => Screen::Home,
            NavEvent::ViewInventory => Screen::Inventory,
            NavEvent::FindDriver => Screen::Drivers,
            NavEvent::BecomeDriver => Screen::Register,
            NavEvent::GetFinancing => Screen::Financing,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Screen::Home => "/",
            Screen::Inventory => "/inventory",
            Screen::Drivers => "/drivers",
            Screen::Register => "/drivers/register",
            Screen::Financing => "/financing",
        }
    }

    /// Only the home screen runs the hero carousel.
    pub fn shows_carousel(self) -> bool {
        self == Screen::Home
    }
}
