//! Plain-text presentation of listings for the command line

pub mod format;
pub mod json_ld;

pub use format::format_brl;
pub use json_ld::json_ld;

use crate::models::Property;

pub const EMPTY_STATE: &str = "Nenhum imóvel encontrado com os critérios de busca/filtro.\n\
Tente ajustar os filtros ou limpar a busca.";

pub fn share_text(property: &Property) -> String {
    format!("Confira este imóvel incrível: {}!", property.name)
}

fn favorite_mark(favorite: bool) -> &'static str {
    if favorite {
        "★"
    } else {
        "☆"
    }
}

/// One card of a result list
pub fn render_card(property: &Property, favorite: bool) -> String {
    let mut lines = vec![format!(
        "{} {} ({})",
        favorite_mark(favorite),
        property.name,
        format_brl(property.price)
    )];

    let mut specs = Vec::new();
    if property.bedrooms > 0 {
        specs.push(format!("{} Quartos", property.bedrooms));
    }
    if property.bathrooms > 0 {
        specs.push(format!("{} Banh.", property.bathrooms));
    }
    specs.push(property.city.clone());
    lines.push(format!("   {}", specs.join(" · ")));

    if !property.tags.is_empty() {
        lines.push(format!("   Tags: {}", property.tags.join(", ")));
    }
    lines.push(format!("   ID: {}", property.id));
    lines.join("\n")
}

/// A result list, or the empty-state notice when nothing matched
pub fn render_list(properties: &[&Property], is_favorite: impl Fn(&str) -> bool) -> String {
    if properties.is_empty() {
        return EMPTY_STATE.to_string();
    }
    properties
        .iter()
        .map(|p| render_card(p, is_favorite(&p.id)))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Full detail view
pub fn render_detail(property: &Property, favorite: bool) -> String {
    let mut lines = vec![
        format!("{} {}", favorite_mark(favorite), property.name),
        format_brl(property.price),
        format!("{}, {}", property.address, property.city),
        String::new(),
        property.description.clone(),
        String::new(),
    ];
    if property.bedrooms > 0 {
        lines.push(format!("- {} Quartos", property.bedrooms));
    }
    if property.bathrooms > 0 {
        lines.push(format!("- {} Banheiros", property.bathrooms));
    }
    lines.push(format!("- {} m²", property.area_sqm));
    if !property.tags.is_empty() {
        lines.push(format!("Tags: {}", property.tags.join(", ")));
    }
    for (index, image) in property.images.iter().enumerate() {
        lines.push(format!("Galeria {}: {}", index + 1, image));
    }
    lines.push(share_text(property));
    lines.join("\n")
}

/// Shown for a detail request with an unknown id
pub fn render_not_found(id: &str) -> String {
    format!(
        "Imóvel Não Encontrado\nO imóvel com o ID {} não existe ou foi removido.",
        id
    )
}
