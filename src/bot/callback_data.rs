//! Payloads carried by inline keyboard buttons.

use teloxide::types::{ChatId, InlineKeyboardButton, InlineKeyboardMarkup};

use crate::utils::validation::validate_telegram_chat_id;

const REPLY_PREFIX: &str = "reply:";

/// Price list screens reachable from the inline menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Menu {
    Main,
    Instagram,
    Neuro,
    Fairy,
}

impl Menu {
    pub fn data(self) -> &'static str {
        match self {
            Menu::Main => "back_main",
            Menu::Instagram => "menu_instagram",
            Menu::Neuro => "menu_neuro",
            Menu::Fairy => "menu_fairy",
        }
    }
}

/// Service packages that prefill an order template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Package {
    Instagram5,
    Instagram10,
    NeuroLite,
    NeuroStandard,
    NeuroPro,
    FairyLite,
    FairyStandard,
    FairyPro,
}

impl Package {
    pub const ALL: [Package; 8] = [
        Package::Instagram5,
        Package::Instagram10,
        Package::NeuroLite,
        Package::NeuroStandard,
        Package::NeuroPro,
        Package::FairyLite,
        Package::FairyStandard,
        Package::FairyPro,
    ];

    pub fn data(self) -> &'static str {
        match self {
            Package::Instagram5 => "pkg_instagram_5",
            Package::Instagram10 => "pkg_instagram_10",
            Package::NeuroLite => "pkg_neuro_lite",
            Package::NeuroStandard => "pkg_neuro_std",
            Package::NeuroPro => "pkg_neuro_pro",
            Package::FairyLite => "pkg_fairy_lite",
            Package::FairyStandard => "pkg_fairy_std",
            Package::FairyPro => "pkg_fairy_pro",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackAction {
    /// Arm reply mode for the pressing administrator.
    Reply(ChatId),
    Menu(Menu),
    Package(Package),
    Order,
}

impl CallbackAction {
    pub fn parse(data: &str) -> Option<Self> {
        let data = data.trim();

        if let Some(raw_id) = data.strip_prefix(REPLY_PREFIX) {
            let id: i64 = raw_id.trim().parse().ok()?;
            validate_telegram_chat_id(id).ok()?;
            return Some(CallbackAction::Reply(ChatId(id)));
        }

        if data == "order" {
            return Some(CallbackAction::Order);
        }

        [Menu::Main, Menu::Instagram, Menu::Neuro, Menu::Fairy]
            .into_iter()
            .find(|menu| menu.data() == data)
            .map(CallbackAction::Menu)
            .or_else(|| {
                Package::ALL
                    .into_iter()
                    .find(|package| package.data() == data)
                    .map(CallbackAction::Package)
            })
    }

    pub fn encode(&self) -> String {
        match self {
            CallbackAction::Reply(target) => format!("{REPLY_PREFIX}{}", target.0),
            CallbackAction::Menu(menu) => menu.data().to_string(),
            CallbackAction::Package(package) => package.data().to_string(),
            CallbackAction::Order => "order".to_string(),
        }
    }
}

/// Keyboard attached to every card forwarded to administrators.
pub fn reply_keyboard(target: ChatId) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::callback(
        "💬 Reply",
        CallbackAction::Reply(target).encode(),
    )]])
}
