use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon name, without the .svg extension
    name: &'static str,
    /// CSS classes for sizing and color
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=""
            aria-hidden="true"
            draggable=false
        />
    }
}

/// Icons shipped under /public/icons
pub mod icons {
    pub const X: &str = "x";
    pub const MENU: &str = "menu";
    pub const CHECK: &str = "check";
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const CHEVRON_LEFT: &str = "chevron-left";
    pub const CHEVRON_RIGHT: &str = "chevron-right";
    pub const CHEVRON_DOWN: &str = "chevron-down";
    pub const EYE: &str = "eye";
    pub const EYE_OFF: &str = "eye-off";
    pub const LOADER: &str = "loader";
    pub const MAIL: &str = "mail";
    pub const PHONE: &str = "phone";
    pub const MAP_PIN: &str = "map-pin";
    pub const STAR: &str = "star";
    pub const QUOTE: &str = "quote";
    pub const BOOK: &str = "book-open";
    pub const GRADUATION: &str = "graduation-cap";
    pub const USERS: &str = "users";
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const HELP: &str = "help-circle";
    pub const COMPASS: &str = "compass";
    pub const CLOCK: &str = "clock";
    pub const MESSAGE: &str = "message-circle";
    pub const FILE_TEXT: &str = "file-text";
    pub const VIDEO: &str = "video";
    pub const ARROW_UP: &str = "arrow-up";
    pub const SPARKLES: &str = "sparkles";
}
