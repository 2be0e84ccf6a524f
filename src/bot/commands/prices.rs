use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use crate::bot::callback_data::{CallbackAction, Menu, Package};
use crate::config::Config;

pub const ORDER_PROMPT: &str = "Describe your order: style or references, how many visuals, deadline.\n\
    You can attach a photo or a document and I will pass everything to the admins.";

pub fn build_prices_text() -> String {
    String::from(
        "<b>Services and prices</b>\n\n\
         <b>ID photos</b>\n\
         • 4 photos 3×4 (digital file) — 500₽\n\n\
         <b>Instagram visuals</b>\n\
         • 5 visuals — 2 500₽\n\
         • 10 visuals — 4 500₽ 🔥 Bestseller\n\n\
         <b>Neuro photoshoot</b>\n\
         • Lite (10 looks) — 3 900₽\n\
         • Standard (20 looks) — 6 900₽ 🔥 Bestseller\n\
         • Pro (40 looks) — 11 900₽\n\n\
         <b>Fairy-tale kids photos</b>\n\
         • Lite (5 looks from 1 photo) — 2 900₽\n\
         • Standard (12 looks from 2 photos) — 5 900₽ 🔥 Bestseller\n\
         • Pro (25 looks from 3–4 photos) — 9 900₽\n\n\
         <b>Hug photos with loved ones</b> — from 1 500₽\n\
         <b>Logo</b> — from 3 000₽\n\
         <b>Telegram/WhatsApp bot</b> — from 12 000₽\n\
         <b>Poster</b> — from 1 500₽\n\
         <b>AI video</b> — from 4 000₽\n\
         <b>YouTube cover</b> — 1 500₽\n\
         <b>Wildberries product cards</b> — from 3 000₽\n\
         <b>Art portrait</b> — 2 000₽\n\n\
         <b>FAQ:</b>\n\
         • Turnaround: 1–3 days depending on volume\n\
         • Edits: 1–2 light edits included\n\
         • Payment: 50% upfront, the rest on delivery\n",
    )
}

fn callback(label: &str, action: CallbackAction) -> InlineKeyboardButton {
    InlineKeyboardButton::callback(label, action.encode())
}

fn package_row(label: &str, package: Package) -> Vec<InlineKeyboardButton> {
    vec![callback(label, CallbackAction::Package(package))]
}

fn back_row() -> Vec<InlineKeyboardButton> {
    vec![callback("⬅️ Back", CallbackAction::Menu(Menu::Main))]
}

pub fn menu_keyboard(menu: Menu, config: &Config) -> InlineKeyboardMarkup {
    let rows = match menu {
        Menu::Main => {
            let mut order_row = vec![callback("💌 Order", CallbackAction::Order)];
            if let Some(url) = &config.contact_url {
                order_row.push(InlineKeyboardButton::url("❓ Question", url.clone()));
            }

            let mut rows = vec![
                vec![callback("✨ Instagram visuals", CallbackAction::Menu(Menu::Instagram))],
                vec![callback("🎭 Neuro photoshoot", CallbackAction::Menu(Menu::Neuro))],
                vec![callback("🧚 Kids: fairy-tale style", CallbackAction::Menu(Menu::Fairy))],
                order_row,
            ];
            if let Some(url) = &config.channel_url {
                rows.push(vec![InlineKeyboardButton::url("📢 Go to the channel", url.clone())]);
            }
            rows
        }
        Menu::Instagram => vec![
            package_row("5 visuals — 2 500₽", Package::Instagram5),
            package_row("10 visuals — 4 500₽ 🔥", Package::Instagram10),
            back_row(),
        ],
        Menu::Neuro => vec![
            package_row("Lite — 3 900₽", Package::NeuroLite),
            package_row("Standard — 6 900₽ 🔥", Package::NeuroStandard),
            package_row("Pro — 11 900₽", Package::NeuroPro),
            back_row(),
        ],
        Menu::Fairy => vec![
            package_row("Lite — 2 900₽ (5 looks)", Package::FairyLite),
            package_row("Standard — 5 900₽ (12 looks) 🔥", Package::FairyStandard),
            package_row("Pro — 9 900₽ (25 looks)", Package::FairyPro),
            back_row(),
        ],
    };
    InlineKeyboardMarkup::new(rows)
}

/// Order template prefilled for `package`.
pub fn package_order_template(package: Package) -> String {
    let template = match package {
        Package::Instagram5 => "I want: Instagram visuals — 5 pcs (2 500₽). References/style: ... Deadline: ...",
        Package::Instagram10 => "I want: Instagram visuals — 10 pcs (4 500₽). References/style: ... Deadline: ...",
        Package::NeuroLite => "I want: Neuro photoshoot — Lite (3 900₽). Looks: 10. Source photos: 1. Style: ...",
        Package::NeuroStandard => "I want: Neuro photoshoot — Standard (6 900₽). Looks: 20. Source photos: 2. Style: ...",
        Package::NeuroPro => "I want: Neuro photoshoot — Pro (11 900₽). Looks: 40. Source photos: 4. Style: ...",
        Package::FairyLite => "I want: Fairy-tale kids photos — Lite (2 900₽). 5 looks from 1 photo. Tale/setting: ...",
        Package::FairyStandard => "I want: Fairy-tale kids photos — Standard (5 900₽). 12 looks from 2 photos. Tale/setting: ...",
        Package::FairyPro => "I want: Fairy-tale kids photos — Pro (9 900₽). 25 looks from 3–4 photos. Tale/setting: ...",
    };
    format!("{template}\n\nPress /order and attach your photos and references, I will pass everything on 💌")
}

#[cfg(test)]
mod tests {
    use super::*;
    use teloxide::types::InlineKeyboardButtonKind;

    fn config() -> Config {
        Config {
            telegram_bot_token: "token".to_string(),
            admin_ids: vec![],
            channel_id: None,
            http_port: 3000,
            contact_url: None,
            channel_url: None,
        }
    }

    fn callback_data(markup: &InlineKeyboardMarkup) -> Vec<String> {
        markup
            .inline_keyboard
            .iter()
            .flatten()
            .filter_map(|button| match &button.kind {
                InlineKeyboardButtonKind::CallbackData(data) => Some(data.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_main_menu_without_links() {
        let markup = menu_keyboard(Menu::Main, &config());
        assert_eq!(
            callback_data(&markup),
            vec!["menu_instagram", "menu_neuro", "menu_fairy", "order"]
        );
        assert_eq!(markup.inline_keyboard.len(), 4);
    }

    #[test]
    fn test_main_menu_with_links() {
        let mut config = config();
        config.contact_url = Some("https://t.me/studio_contact".parse().unwrap());
        config.channel_url = Some("https://t.me/studio_channel".parse().unwrap());

        let markup = menu_keyboard(Menu::Main, &config);
        assert_eq!(markup.inline_keyboard.len(), 5);
        assert_eq!(markup.inline_keyboard[3].len(), 2);
    }

    #[test]
    fn test_sub_menus_end_with_back() {
        for menu in [Menu::Instagram, Menu::Neuro, Menu::Fairy] {
            let data = callback_data(&menu_keyboard(menu, &config()));
            assert_eq!(data.last().map(String::as_str), Some("back_main"));
            for entry in &data[..data.len() - 1] {
                assert!(matches!(
                    CallbackAction::parse(entry),
                    Some(CallbackAction::Package(_))
                ));
            }
        }
    }

    #[test]
    fn test_package_template_mentions_order() {
        for package in Package::ALL {
            let text = package_order_template(package);
            assert!(text.starts_with("I want:"));
            assert!(text.contains("/order"));
        }
    }

    #[test]
    fn test_prices_text_is_html() {
        let text = build_prices_text();
        assert!(text.starts_with("<b>Services and prices</b>"));
        assert!(text.contains("Logo</b> — from 3 000₽"));
    }
}
