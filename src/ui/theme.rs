use eframe::egui::Color32;

pub const BRAND_RED: Color32 = Color32::from_rgb(0xDA, 0x29, 0x1C);
pub const BRAND_GREEN: Color32 = Color32::from_rgb(0x00, 0x7A, 0x33);
pub const BRAND_DARK: Color32 = Color32::from_rgb(0x10, 0x18, 0x20);
pub const BRAND_LIGHT: Color32 = Color32::from_rgb(0xEF, 0xEF, 0xEF);
pub const TYRE_GREY: Color32 = Color32::from_rgb(0x2B, 0x2B, 0x2B);

pub const SHOP_NAME: &str = "Tara Service Station";
pub const APP_TITLE: &str = "Tara Service Station Tyre Inventory & Storage";
