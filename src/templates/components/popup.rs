use crate::domain::{format_brl, Listing};
use maud::{html, Markup};

/// Popup shown when a listing's marker is clicked.
pub fn listing_popup(listing: &Listing) -> Markup {
    html! {
        div style="max-width: 200px; text-align: center; font-family: Arial, sans-serif;" {
            h3 style="color: #3498db; margin-bottom: 5px;" { "Imóvel à Venda" }
            p style="margin-bottom: 5px;" { b { "Valor Total:" } " " (format_brl(listing.total_value)) }
            p style="margin-bottom: 5px;" { b { "Bairro:" } " " (listing.neighborhood) }
            p style="margin-bottom: 5px;" { b { "Quartos:" } " " (listing.bedrooms) }
            p style="margin-bottom: 5px;" { b { "Estação Próxima:" } " " (listing.station_label()) }
        }
    }
}
