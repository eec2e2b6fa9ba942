use std::collections::HashMap;

/// Feature names in the order the pipeline was fitted with.
pub const FEATURES: [&str; 5] = ["MedInc", "AveRooms", "HouseAge", "Latitude", "Longitude"];

pub const FEATURE_COUNT: usize = FEATURES.len();

#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("missing form field '{0}'")]
    MissingField(&'static str),
    #[error("field '{name}' is not a number: '{value}'")]
    NotNumeric { name: &'static str, value: String },
}

/// One prediction request: the five named inputs, already coerced to floats.
///
/// Parsing is all-or-nothing. A request with any field missing or
/// non-numeric is rejected as a whole.
#[derive(Debug, Clone, PartialEq)]
pub struct HousingFeatures {
    pub med_inc: f64,
    pub ave_rooms: f64,
    pub house_age: f64,
    pub latitude: f64,
    pub longitude: f64,
}

impl HousingFeatures {
    pub fn from_form(form: &HashMap<String, String>) -> Result<Self, FormError> {
        let mut parsed = [0.0_f64; FEATURE_COUNT];
        for (slot, name) in parsed.iter_mut().zip(FEATURES) {
            let value = form.get(name).ok_or(FormError::MissingField(name))?;
            *slot = value
                .trim()
                .parse()
                .map_err(|_| FormError::NotNumeric { name, value: value.clone() })?;
        }
        let [med_inc, ave_rooms, house_age, latitude, longitude] = parsed;
        Ok(Self { med_inc, ave_rooms, house_age, latitude, longitude })
    }

    pub fn to_array(&self) -> [f64; FEATURE_COUNT] {
        [self.med_inc, self.ave_rooms, self.house_age, self.latitude, self.longitude]
    }
}
