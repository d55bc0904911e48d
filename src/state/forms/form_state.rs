//! Form state management and form structs

use super::field::FormField;
use crate::config;
use crate::webhook::{BlogContentRequest, VoiceConfigRequest};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> &mut FormField;
    fn get_field(&self, index: usize) -> Option<&FormField>;

    fn is_active_field_select(&self) -> bool {
        self.get_field(self.active_field())
            .is_some_and(FormField::is_select)
    }
}

// Blog Content Form
#[derive(Debug, Clone)]
pub struct BlogContentForm {
    pub blog_title: FormField,
    pub seo_keywords: FormField,
    pub content_preference: FormField,
    pub active_field_index: usize,
}

impl BlogContentForm {
    pub fn new() -> Self {
        Self {
            blog_title: FormField::text("blog_title", "Blog Title", "Enter your blog title"),
            seo_keywords: FormField::text("seo_keywords", "Seo Keywords", "Enter SEO keywords"),
            content_preference: FormField::select(
                "content_preference",
                "Content Preference",
                "Select an option ...",
                config::CONTENT_PREFERENCE_OPTIONS,
            ),
            active_field_index: 0,
        }
    }

    /// Returns true if the submit row is currently active
    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == 3
    }

    /// Build the outbound record, or None while any required field is empty
    pub fn to_request(&self) -> Option<BlogContentRequest> {
        if self.blog_title.is_empty()
            || self.seo_keywords.is_empty()
            || self.content_preference.is_empty()
        {
            return None;
        }
        Some(BlogContentRequest {
            blog_title: self.blog_title.as_value().to_string(),
            seo_keywords: self.seo_keywords.as_value().to_string(),
            content_preference: self.content_preference.as_value().to_string(),
        })
    }

    /// Clear every field and return focus to the first one
    pub fn reset(&mut self) {
        self.blog_title.clear();
        self.seo_keywords.clear();
        self.content_preference.clear();
        self.active_field_index = 0;
    }
}

impl Default for BlogContentForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for BlogContentForm {
    fn field_count(&self) -> usize {
        4 // blog title, seo keywords, content preference, submit row
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(3);
    }
    fn get_active_field_mut(&mut self) -> &mut FormField {
        match self.active_field_index {
            0 => &mut self.blog_title,
            1 => &mut self.seo_keywords,
            // For the submit row (index 3), return the select as dummy (won't be edited)
            _ => &mut self.content_preference,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.blog_title),
            1 => Some(&self.seo_keywords),
            2 => Some(&self.content_preference),
            // Index 3 is the submit row, no FormField for it
            _ => None,
        }
    }
}

// Voice Configuration Form
#[derive(Debug, Clone)]
pub struct VoiceConfigForm {
    pub voice_type: FormField,
    pub brand_voice: FormField,
    pub content_structure: FormField,
    pub active_field_index: usize,
}

impl VoiceConfigForm {
    pub fn new() -> Self {
        Self {
            voice_type: FormField::select(
                "voice_type",
                "Voice Type",
                "Select voice type",
                config::VOICE_TYPE_OPTIONS,
            ),
            brand_voice: FormField::select(
                "brand_voice",
                "Brand Voice Style",
                "Select brand voice",
                config::BRAND_VOICE_OPTIONS,
            ),
            content_structure: FormField::select(
                "content_structure",
                "Content Structure",
                "Select structure",
                config::CONTENT_STRUCTURE_OPTIONS,
            ),
            active_field_index: 0,
        }
    }

    /// Returns true if the submit row is currently active
    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == 3
    }

    /// Build the outbound record, or None while any selection is missing
    pub fn to_request(&self) -> Option<VoiceConfigRequest> {
        if self.voice_type.is_empty()
            || self.brand_voice.is_empty()
            || self.content_structure.is_empty()
        {
            return None;
        }
        Some(VoiceConfigRequest {
            voice_type: self.voice_type.as_value().to_string(),
            brand_voice: self.brand_voice.as_value().to_string(),
            content_structure: self.content_structure.as_value().to_string(),
        })
    }

    /// Clear every selection and return focus to the first field
    pub fn reset(&mut self) {
        self.voice_type.clear();
        self.brand_voice.clear();
        self.content_structure.clear();
        self.active_field_index = 0;
    }
}

impl Default for VoiceConfigForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for VoiceConfigForm {
    fn field_count(&self) -> usize {
        4 // voice type, brand voice, content structure, submit row
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(3);
    }
    fn get_active_field_mut(&mut self) -> &mut FormField {
        match self.active_field_index {
            0 => &mut self.voice_type,
            1 => &mut self.brand_voice,
            _ => &mut self.content_structure,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.voice_type),
            1 => Some(&self.brand_voice),
            2 => Some(&self.content_structure),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_blog_form() -> BlogContentForm {
        let mut form = BlogContentForm::new();
        for c in "SEO Tips".chars() {
            form.blog_title.push_char(c);
        }
        for c in "seo, tips".chars() {
            form.seo_keywords.push_char(c);
        }
        form.content_preference.select_next();
        form
    }

    fn filled_voice_form() -> VoiceConfigForm {
        let mut form = VoiceConfigForm::new();
        form.voice_type.select_next();
        form.brand_voice.select_next();
        form.content_structure.select_next();
        form
    }

    mod blog_content_form {
        use super::*;

        #[test]
        fn test_new_has_correct_defaults() {
            let form = BlogContentForm::new();
            assert_eq!(form.active_field_index, 0);
            assert_eq!(form.blog_title.name, "blog_title");
            assert_eq!(form.seo_keywords.name, "seo_keywords");
            assert_eq!(form.content_preference.name, "content_preference");
        }

        #[test]
        fn test_field_count() {
            let form = BlogContentForm::new();
            assert_eq!(form.field_count(), 4);
        }

        #[test]
        fn test_next_field_cycles() {
            let mut form = BlogContentForm::new();
            for _ in 0..4 {
                form.next_field();
            }
            assert_eq!(form.active_field_index, 0); // Wrapped back
        }

        #[test]
        fn test_prev_field_cycles() {
            let mut form = BlogContentForm::new();
            form.prev_field();
            assert_eq!(form.active_field_index, 3); // Wrapped to submit row
        }

        #[test]
        fn test_is_submit_row_active() {
            let mut form = BlogContentForm::new();
            assert!(!form.is_submit_row_active());
            form.active_field_index = 3;
            assert!(form.is_submit_row_active());
        }

        #[test]
        fn test_get_field_returns_correct_fields() {
            let form = BlogContentForm::new();
            assert_eq!(form.get_field(0).unwrap().name, "blog_title");
            assert_eq!(form.get_field(1).unwrap().name, "seo_keywords");
            assert_eq!(form.get_field(2).unwrap().name, "content_preference");
            assert!(form.get_field(3).is_none()); // submit row
            assert!(form.get_field(4).is_none());
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = BlogContentForm::new();
            form.set_active_field(100);
            assert_eq!(form.active_field_index, 3);
        }

        #[test]
        fn test_is_active_field_select() {
            let mut form = BlogContentForm::new();
            assert!(!form.is_active_field_select());
            form.active_field_index = 2;
            assert!(form.is_active_field_select());
            form.active_field_index = 3;
            assert!(!form.is_active_field_select());
        }

        #[test]
        fn test_to_request_none_while_any_field_empty() {
            let empty = BlogContentForm::new();
            assert!(empty.to_request().is_none());

            let mut no_preference = filled_blog_form();
            no_preference.content_preference.clear();
            assert!(no_preference.to_request().is_none());

            let mut no_title = filled_blog_form();
            no_title.blog_title.clear();
            assert!(no_title.to_request().is_none());
        }

        #[test]
        fn test_to_request_carries_current_values() {
            let form = filled_blog_form();
            let request = form.to_request().expect("form is complete");
            assert_eq!(request.blog_title, "SEO Tips");
            assert_eq!(request.seo_keywords, "seo, tips");
            assert_eq!(request.content_preference, "ai-generated");
        }

        #[test]
        fn test_reset_clears_fields_and_focus() {
            let mut form = filled_blog_form();
            form.active_field_index = 3;
            form.reset();
            assert!(form.blog_title.is_empty());
            assert!(form.seo_keywords.is_empty());
            assert!(form.content_preference.is_empty());
            assert_eq!(form.active_field_index, 0);
        }
    }

    mod voice_config_form {
        use super::*;

        #[test]
        fn test_new_has_correct_defaults() {
            let form = VoiceConfigForm::new();
            assert_eq!(form.active_field_index, 0);
            assert!(form.voice_type.is_select());
            assert!(form.brand_voice.is_select());
            assert!(form.content_structure.is_select());
        }

        #[test]
        fn test_field_count() {
            let form = VoiceConfigForm::new();
            assert_eq!(form.field_count(), 4);
        }

        #[test]
        fn test_get_field_returns_correct_fields() {
            let form = VoiceConfigForm::new();
            assert_eq!(form.get_field(0).unwrap().name, "voice_type");
            assert_eq!(form.get_field(1).unwrap().name, "brand_voice");
            assert_eq!(form.get_field(2).unwrap().name, "content_structure");
            assert!(form.get_field(3).is_none());
        }

        #[test]
        fn test_to_request_none_until_all_selected() {
            let mut form = VoiceConfigForm::new();
            assert!(form.to_request().is_none());
            form.voice_type.select_next();
            form.brand_voice.select_next();
            assert!(form.to_request().is_none());
            form.content_structure.select_next();
            assert!(form.to_request().is_some());
        }

        #[test]
        fn test_to_request_submits_option_labels() {
            let form = filled_voice_form();
            let request = form.to_request().expect("form is complete");
            assert_eq!(request.voice_type, "Personal Voice (I, Me, My)");
            assert_eq!(
                request.brand_voice,
                "Professional and Authoritative Brand Voice Characteristics"
            );
            assert_eq!(request.content_structure, "Listicle Structure");
        }

        #[test]
        fn test_reset_retains_nothing() {
            let mut form = filled_voice_form();
            form.active_field_index = 2;
            form.reset();
            assert!(form.to_request().is_none());
            assert_eq!(form.active_field_index, 0);
        }
    }
}
