use contracts::domain::a009_advertisement::{Advertisement, AdvertisementDto, AdvertisementKind};
use contracts::shared::validation::FieldErrors;

use crate::shared::attachment::Attachment;
use crate::shared::form::{FormDraft, FormMode};

/// Черновик рекламного материала: текстовые поля и выбранные файлы.
#[derive(Debug, Clone)]
pub struct AdvertisementDraft {
    pub kind: AdvertisementKind,
    pub dto: AdvertisementDto,
    pub image: Option<Attachment>,
    pub video: Option<Attachment>,
}

impl AdvertisementDraft {
    pub fn new(kind: AdvertisementKind) -> Self {
        Self {
            kind,
            dto: AdvertisementDto::default(),
            image: None,
            video: None,
        }
    }

    /// Replaces the image; the preview of the previous local file is released.
    pub fn set_image(&mut self, attachment: Attachment) {
        if let Some(old) = self.image.replace(attachment) {
            old.revoke();
        }
    }

    pub fn set_video(&mut self, attachment: Attachment) {
        if let Some(old) = self.video.replace(attachment) {
            old.revoke();
        }
    }

    /// Multipart file parts: `(field, file, file name)` for files picked in this session.
    pub fn uploads(&self) -> Vec<(&'static str, &web_sys::File, &str)> {
        [("image", &self.image), ("video", &self.video)]
            .into_iter()
            .filter_map(|(name, slot)| {
                let attachment = slot.as_ref()?;
                attachment
                    .file()
                    .map(|file| (name, file, attachment.file_name.as_str()))
            })
            .collect()
    }

    pub fn image_preview(&self) -> Option<String> {
        self.image.as_ref().map(|a| a.preview_url.clone())
    }

    pub fn video_preview(&self) -> Option<String> {
        self.video.as_ref().map(|a| a.preview_url.clone())
    }
}

fn stored_file(url: Option<&str>) -> Option<Attachment> {
    url.map(str::trim)
        .filter(|u| !u.is_empty())
        .map(Attachment::remote)
}

impl FormDraft for AdvertisementDraft {
    type Record = Advertisement;
    const LABEL: &'static str = "Advertisement";

    fn from_record(blank: &Self, record: &Advertisement) -> Self {
        Self {
            kind: blank.kind,
            dto: AdvertisementDto::from(record),
            image: stored_file(record.image.as_deref()),
            video: stored_file(record.video.as_deref()),
        }
    }

    fn validate(&self, mode: &FormMode) -> FieldErrors {
        self.dto.validate(
            self.kind,
            mode.is_create(),
            self.image.is_some(),
            self.video.is_some(),
        )
    }

    fn discard(&self) {
        for attachment in [&self.image, &self.video].into_iter().flatten() {
            attachment.revoke();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::FormState;

    fn poster() -> Advertisement {
        Advertisement {
            id: "ad1".into(),
            title: "Diwali sale".into(),
            image: Some("https://cdn.example.com/ads/diwali.jpg".into()),
            start_date: Some("2024-10-20T00:00:00.000Z".into()),
            end_date: Some("2024-11-05".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_create_requires_image_for_posters() {
        let mut form = FormState::new(AdvertisementDraft::new(AdvertisementKind::Posters));
        form.open_create();
        form.edit(|d| d.dto.title = "Diwali sale".into());
        assert!(!form.validate());
        assert_eq!(form.error("image").as_deref(), Some("Please select an image"));
    }

    #[test]
    fn test_edit_keeps_stored_image() {
        let mut form = FormState::new(AdvertisementDraft::new(AdvertisementKind::Posters));
        form.open_edit(&poster());

        assert_eq!(form.draft.kind, AdvertisementKind::Posters);
        assert_eq!(form.draft.dto.start_date, "2024-10-20");
        assert_eq!(
            form.draft.image_preview().as_deref(),
            Some("https://cdn.example.com/ads/diwali.jpg")
        );
        assert!(form.draft.video.is_none());
        // stored files are not uploaded again
        assert!(form.draft.uploads().is_empty());
        assert!(form.validate());
    }

    #[test]
    fn test_poster_schedule_order() {
        let mut form = FormState::new(AdvertisementDraft::new(AdvertisementKind::Posters));
        form.open_edit(&poster());
        form.edit(|d| d.dto.end_date = "2024-10-01".into());
        assert!(!form.validate());
        assert!(form.error("end_date").is_some());
    }

    #[test]
    fn test_card_points_need_points() {
        let mut form = FormState::new(AdvertisementDraft::new(AdvertisementKind::CardPoints));
        form.open_create();
        form.edit(|d| d.dto.title = "Gold tier".into());
        assert!(!form.validate());
        assert_eq!(form.error("description").as_deref(), Some("Points is required"));
    }
}
