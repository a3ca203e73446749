use maud::{html, Markup};

pub mod error;
pub mod popup;

pub use error::html_error_response;
pub use popup::listing_popup;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}
