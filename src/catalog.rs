//! Fixed product catalog and the default customer.
//!
//! The catalog ships with the binary and is reseeded on every startup so
//! that price changes roll out together with a deploy.

use crate::DEFAULT_CUSTOMER_ID;
use crate::domain::customer::NewCustomer;
use crate::domain::product::{NewProduct, PriceUnit};

pub const PROD_ROOM_DBL_SINGLE: &str = "PROD-ROOM-DBL-SINGLE";
pub const PROD_SEMINAR_FULL: &str = "PROD-SEMINAR-FULL";
pub const PROD_SEMINAR_HALF: &str = "PROD-SEMINAR-HALF";
pub const PROD_DINNER_3C: &str = "PROD-DINNER-3C";
pub const PROD_EXTRA_BROETCHEN: &str = "PROD-EXTRA-BROETCHEN";
pub const PROD_EXTRA_SALATBUFFET: &str = "PROD-EXTRA-SALATBUFFET";
pub const PROD_EXTRA_WEINBEGLEITUNG: &str = "PROD-EXTRA-WEINBEGLEITUNG";
pub const PROD_ACTIVITY_KOCHKURS: &str = "PROD-ACTIVITY-KOCHKURS";
pub const PROD_ACTIVITY_KUECHE: &str = "PROD-ACTIVITY-KUECHE";

pub const ROOM_DBL_SINGLE_PRICE: f64 = 103.0;
pub const SEMINAR_FULL_PRICE: f64 = 68.0;
pub const SEMINAR_HALF_PRICE: f64 = 49.0;
pub const DINNER_3C_PRICE: f64 = 39.0;
pub const BROETCHEN_PRICE: f64 = 7.0;
pub const SALATBUFFET_PRICE: f64 = 15.0;
pub const WEINBEGLEITUNG_PRICE: f64 = 22.0;
pub const KOCHKURS_PRICE: f64 = 89.0;
pub const KUECHE_PRICE: f64 = 39.0;

const DEFAULT_TAX_RATE: f64 = 0.1;

/// Catalog rows upserted on startup.
pub fn seed_products() -> Vec<NewProduct> {
    vec![
        NewProduct::new(
            PROD_ROOM_DBL_SINGLE,
            "Nächtigung im Doppelzimmer zur Einzelnutzung",
            "Unterkunft",
            "Übernachtung im Doppelzimmer zur Einzelnutzung inklusive Frühstück",
            PriceUnit::PerPersonPerNight,
            ROOM_DBL_SINGLE_PRICE,
            DEFAULT_TAX_RATE,
        ),
        NewProduct::new(
            PROD_SEMINAR_FULL,
            "Seminarpauschale ganztags",
            "Seminar",
            "Seminarraum, Technik, zwei Kaffeepausen und Mittagessen",
            PriceUnit::PerPersonPerDay,
            SEMINAR_FULL_PRICE,
            DEFAULT_TAX_RATE,
        ),
        NewProduct::new(
            PROD_SEMINAR_HALF,
            "Seminarpauschale halbtags",
            "Seminar",
            "Seminarraum, Technik, eine Kaffeepause und Mittagessen",
            PriceUnit::PerPersonPerDay,
            SEMINAR_HALF_PRICE,
            DEFAULT_TAX_RATE,
        ),
        NewProduct::new(
            PROD_DINNER_3C,
            "Abendessen 3-Gang",
            "Verpflegung",
            "Drei Gänge Abendmenü inklusive Tischgetränke",
            PriceUnit::PerPersonPerMeal,
            DINNER_3C_PRICE,
            DEFAULT_TAX_RATE,
        ),
        NewProduct::new(
            PROD_EXTRA_BROETCHEN,
            "Belegte Brötchen",
            "Verpflegung",
            "Belegte Brötchen zur Anreise oder Pause",
            PriceUnit::PerPerson,
            BROETCHEN_PRICE,
            DEFAULT_TAX_RATE,
        ),
        NewProduct::new(
            PROD_EXTRA_SALATBUFFET,
            "Salatbuffet",
            "Verpflegung",
            "Salatbuffet als Ergänzung zum Mittagessen",
            PriceUnit::PerPerson,
            SALATBUFFET_PRICE,
            DEFAULT_TAX_RATE,
        ),
        NewProduct::new(
            PROD_EXTRA_WEINBEGLEITUNG,
            "Weinbegleitung zum Abendessen",
            "Verpflegung",
            "Korrespondierende Weine zu den Gängen des Abendessens",
            PriceUnit::PerPersonPerMeal,
            WEINBEGLEITUNG_PRICE,
            DEFAULT_TAX_RATE,
        ),
        NewProduct::new(
            PROD_ACTIVITY_KOCHKURS,
            "Kochkurs mit Küchenchef",
            "Aktivität",
            "Gemeinsamer Kochkurs mit dem Küchenchef inklusive Menü",
            PriceUnit::PerPerson,
            KOCHKURS_PRICE,
            DEFAULT_TAX_RATE,
        ),
        NewProduct::new(
            PROD_ACTIVITY_KUECHE,
            "Küchenmiete",
            "Aktivität",
            "Exklusive Nutzung der Seminarküche",
            PriceUnit::PerHour,
            KUECHE_PRICE,
            DEFAULT_TAX_RATE,
        ),
    ]
}

/// Fallback customer for offer requests that do not name one.
pub fn default_customer() -> NewCustomer {
    NewCustomer::new(DEFAULT_CUSTOMER_ID)
        .with_company("Musterfirma")
        .with_contact("Max", "Muster")
        .with_email("max.muster@mail.com")
        .with_phone("4366012345678")
        .with_address("Rennweg 73", "Wien", "1030", "AT")
        .with_language("DE")
}
