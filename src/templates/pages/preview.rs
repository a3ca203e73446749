use crate::domain::{format_brl, money::format_thousands, Listing, ListingSummary};
use maud::{html, Markup};

pub const PREVIEW_ROWS: usize = 10;

fn stat(value: f64) -> String {
    if value.is_nan() {
        "-".into()
    } else {
        format_thousands(value, 2)
    }
}

pub fn summary_table(summary: &ListingSummary) -> Markup {
    html! {
        p { strong { (summary.rows) } " linhas carregadas." }
        table {
            thead {
                tr {
                    th { "Coluna" }
                    th { "count" }
                    th { "mean" }
                    th { "std" }
                    th { "min" }
                    th { "max" }
                }
            }
            tbody {
                @for c in &summary.columns {
                    tr {
                        td { (c.column) }
                        td { (c.count) }
                        td { (stat(c.mean)) }
                        td { (stat(c.std)) }
                        td { (stat(c.min)) }
                        td { (stat(c.max)) }
                    }
                }
            }
        }
    }
}

pub fn preview_table(listings: &[Listing]) -> Markup {
    html! {
        table {
            thead {
                tr {
                    th { "valor_total" }
                    th { "bairro" }
                    th { "quartos" }
                    th { "estacao_prox" }
                    th { "lat" }
                    th { "lon" }
                }
            }
            tbody {
                @for listing in listings.iter().take(PREVIEW_ROWS) {
                    tr {
                        td { (format_brl(listing.total_value)) }
                        td { (listing.neighborhood) }
                        td { (listing.bedrooms) }
                        td { (listing.station_label()) }
                        td {
                            @match listing.latitude {
                                Some(v) => (v),
                                None => "-",
                            }
                        }
                        td {
                            @match listing.longitude {
                                Some(v) => (v),
                                None => "-",
                            }
                        }
                    }
                }
            }
        }
    }
}
