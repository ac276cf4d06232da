use serde::Deserialize;

// real-estate
//  ├── id
//  ├── address / zip_code
//  ├── price / area / bedrooms
//  ├── image / description / is_rental
//  ├── city
//  │    ├── id
//  │    ├── name
//  │    └── region
//  │         ├── id
//  │         └── name
//  └── agent (id, name, surname, avatar)

/// A listing exactly as the marketplace API delivers it. Immutable for the
/// lifetime of a fetch; anything the payload may lack is an `Option`, and a
/// missing field simply fails whichever filter constraint reads it.
#[derive(Debug, Clone, Deserialize)]
pub struct Listing {
    pub id: i64,

    pub address: Option<String>,
    #[serde(rename = "zip_code")]
    pub zip_code: Option<String>,

    pub price: Option<i64>,
    pub area: Option<f64>,
    pub bedrooms: Option<i64>,

    pub image: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "is_rental")]
    pub is_rental: Option<i64>,

    pub city: Option<City>,
    pub agent: Option<Agent>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct City {
    pub id: i64,
    pub name: Option<String>,
    #[serde(rename = "region_id")]
    pub region_id: Option<i64>,
    pub region: Option<Region>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Region {
    pub id: i64,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Agent {
    pub id: i64,
    pub name: Option<String>,
    pub surname: Option<String>,
    pub avatar: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl Listing {
    /// Resolve the listing's region through its location reference.
    /// Some payloads embed the full region object, others only `region_id`.
    pub fn region_id(&self) -> Option<i64> {
        let city = self.city.as_ref()?;
        if let Some(region) = &city.region {
            return Some(region.id);
        }
        city.region_id
    }

    pub fn is_rental(&self) -> bool {
        self.is_rental.unwrap_or(0) != 0
    }
}

impl Agent {
    pub fn full_name(&self) -> String {
        let name = self.name.as_deref().unwrap_or("");
        let surname = self.surname.as_deref().unwrap_or("");
        format!("{name} {surname}").trim().to_string()
    }
}
