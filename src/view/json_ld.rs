use crate::models::Property;
use serde_json::{json, Value};

/// schema.org structured data for a detail page
pub fn json_ld(property: &Property) -> Value {
    let schema_type = match property.kind.as_deref() {
        Some("Residence") => "Residence",
        _ => "Offer",
    };

    let mut doc = json!({
        "@context": "https://schema.org",
        "@type": schema_type,
        "name": property.name,
        "description": property.description,
        "image": property.cover_image(),
        "offers": {
            "@type": "Offer",
            "priceCurrency": "BRL",
            "price": property.price,
            "availability": "https://schema.org/InStock"
        },
        "address": {
            "@type": "PostalAddress",
            "streetAddress": property.address,
            "addressLocality": property.city,
            "addressCountry": "BR"
        },
        "floorSize": {
            "@type": "QuantitativeValue",
            "value": property.area_sqm,
            "unitCode": "SQM"
        }
    });

    if property.bedrooms > 0 {
        doc["numberOfBedrooms"] = json!(property.bedrooms);
    }
    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::property;

    #[test]
    fn residence_type_and_bedrooms() {
        let mut p = property("r1", "Santos", 450_000.0, 3, &[]);
        p.kind = Some("Residence".into());

        let doc = json_ld(&p);
        assert_eq!(doc["@type"], "Residence");
        assert_eq!(doc["numberOfBedrooms"], 3);
        assert_eq!(doc["offers"]["priceCurrency"], "BRL");
        assert_eq!(doc["address"]["addressLocality"], "Santos");
        assert_eq!(doc["image"], "img/r1.jpg");
    }

    #[test]
    fn other_kinds_are_offers_without_zero_bedrooms() {
        let p = property("l1", "Santos", 90_000.0, 0, &[]);

        let doc = json_ld(&p);
        assert_eq!(doc["@type"], "Offer");
        assert!(doc.get("numberOfBedrooms").is_none());
        assert_eq!(doc["floorSize"]["unitCode"], "SQM");
    }
}
