use maud::{html, Markup, PreEscaped, DOCTYPE};

pub const PLOTLY_JS: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";
pub const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
pub const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";

const PAGE_CSS: &str = r#"
body { margin: 0; background: rgb(14,17,23); color: #fafafa; font-family: Arial, sans-serif; }
header { display: flex; align-items: center; justify-content: space-between; padding: 0.75rem 1.5rem; border-bottom: 1px solid #262730; }
header nav a { color: #fafafa; margin-left: 1rem; }
main.container { max-width: 1100px; margin: 0 auto; padding: 1rem 1.5rem 3rem; }
.card { background: #1a1c24; border-radius: 8px; padding: 1rem 1.25rem; margin: 1.5rem 0; }
.card table { width: 100%; border-collapse: collapse; font-size: 0.9rem; }
.card th, .card td { padding: 6px 8px; border-bottom: 1px solid #262730; text-align: left; }
"#;

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="pt-BR" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href=(LEAFLET_CSS);
                style { (PreEscaped(PAGE_CSS)) }
                script src=(PLOTLY_JS) {}
                script src=(LEAFLET_JS) {}
            }
            body {
                header {
                    h3 { "Imóveis à venda em São Paulo" }
                    nav {
                        a href="/" { "Painel" }
                        a href="/export" { "Exportar XLSX" }
                    }
                }
                (content)
            }
        }
    }
}
