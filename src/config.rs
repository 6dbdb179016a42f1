pub const SITE_NAME: &str = "Nébula Estudio";
pub const CONTACT_EMAIL: &str = "hola@nebulaestudio.com";
pub const CONTACT_PHONE: &str = "+34 910 000 000";

#[cfg(debug_assertions)]
pub fn get_form_delay_ms() -> u32 {
    400  // Short delay when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_form_delay_ms() -> u32 {
    1500  // Long enough for the sending state to be visible
}
