//! Post Item Wizard
//!
//! Form state and step gating for the multi-step "share an item" flow.
//! Steps are 1-based; a step only opens once every step before it validates.

use crate::models::CreateItemData;

/// Wizard steps: (title, description)
pub const STEPS: &[(&str, &str)] = &[
    ("Item Details", "Tell us about your item"),
    ("Photos", "Add photos of your item"),
    ("Pickup Info", "Set pickup details"),
    ("Review", "Review and publish"),
];

/// Everything the wizard collects. Text fields stay as entered (including
/// across a failed submission); empties become `None` only at submit time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PostForm {
    pub title: String,
    pub brand: String,
    pub description: String,
    pub category: String,
    pub size: String,
    pub condition: String,
    pub color: String,
    pub measurement_chest: String,
    pub measurement_length: String,
    pub measurement_sleeves: String,
    pub photos: Vec<String>,
    pub pickup_location: String,
    pub pickup_instructions: String,
    pub availability: Vec<String>,
    pub meeting_preference: String,
}

impl PostForm {
    pub fn to_create_item(&self) -> CreateItemData {
        CreateItemData {
            title: self.title.trim().to_string(),
            brand: opt(&self.brand),
            description: self.description.trim().to_string(),
            category: self.category.clone(),
            size: self.size.clone(),
            condition: self.condition.clone(),
            color: opt(&self.color),
            measurement_chest: opt(&self.measurement_chest),
            measurement_length: opt(&self.measurement_length),
            measurement_sleeves: opt(&self.measurement_sleeves),
            images: self.photos.clone(),
            pickup_location: self.pickup_location.trim().to_string(),
            pickup_instructions: opt(&self.pickup_instructions),
            availability: self.availability.clone(),
            meeting_preference: opt(&self.meeting_preference),
        }
    }
}

fn opt(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Whether a single step's own fields validate
pub fn step_is_complete(form: &PostForm, step: usize) -> bool {
    match step {
        1 => {
            !form.title.trim().is_empty()
                && !form.description.trim().is_empty()
                && !form.category.is_empty()
                && !form.size.is_empty()
                && !form.condition.is_empty()
        }
        2 => !form.photos.is_empty(),
        3 => !form.pickup_location.trim().is_empty(),
        4 => (1..4).all(|s| step_is_complete(form, s)),
        _ => false,
    }
}

/// A step opens only when every step before it validates
pub fn can_advance_to(form: &PostForm, step: usize) -> bool {
    step >= 1 && step <= STEPS.len() && (1..step).all(|s| step_is_complete(form, s))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> PostForm {
        PostForm {
            title: "Vintage Denim Jacket".to_string(),
            description: "Classic blue denim jacket".to_string(),
            category: "Jackets".to_string(),
            size: "M".to_string(),
            condition: "Like New".to_string(),
            photos: vec!["/classic-denim-jacket.png".to_string()],
            pickup_location: "Downtown".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn step_one_requires_the_descriptive_fields() {
        let mut form = filled_form();
        assert!(step_is_complete(&form, 1));
        form.title.clear();
        assert!(!step_is_complete(&form, 1));
    }

    #[test]
    fn later_steps_stay_gated_until_earlier_ones_validate() {
        let form = PostForm::default();
        assert!(can_advance_to(&form, 1));
        assert!(!can_advance_to(&form, 2));

        let form = filled_form();
        assert!(can_advance_to(&form, 4));
    }

    #[test]
    fn photos_gate_step_three() {
        let mut form = filled_form();
        form.photos.clear();
        assert!(!can_advance_to(&form, 3));
    }

    #[test]
    fn review_step_validates_the_whole_form() {
        let mut form = filled_form();
        assert!(step_is_complete(&form, 4));
        form.pickup_location.clear();
        assert!(!step_is_complete(&form, 4));
    }

    #[test]
    fn submit_payload_drops_blank_optionals() {
        let mut form = filled_form();
        form.brand = "  ".to_string();
        form.color = "Blue".to_string();

        let data = form.to_create_item();
        assert_eq!(data.brand, None);
        assert_eq!(data.color.as_deref(), Some("Blue"));
        assert_eq!(data.images.len(), 1);
    }
}
