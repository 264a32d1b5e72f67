use serde::{Deserialize, Serialize};

use crate::shared::dates::normalize_input_date;
use crate::shared::record::Record;
use crate::shared::status::RecordStatus;
use crate::shared::validation::{check_date_order, require, FieldErrors};

/// Вид рекламного материала; определяет REST-ресурс и набор обязательных полей
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AdvertisementKind {
    CardPoints,
    Cards,
    Posters,
    SliderCards,
    Videos,
}

impl AdvertisementKind {
    pub const ALL: [AdvertisementKind; 5] = [
        AdvertisementKind::CardPoints,
        AdvertisementKind::Cards,
        AdvertisementKind::Posters,
        AdvertisementKind::SliderCards,
        AdvertisementKind::Videos,
    ];

    /// Path segment under `/api/advertisement/`
    pub fn path(&self) -> &'static str {
        match self {
            AdvertisementKind::CardPoints => "card-points",
            AdvertisementKind::Cards => "cards",
            AdvertisementKind::Posters => "posters",
            AdvertisementKind::SliderCards => "slider-cards",
            AdvertisementKind::Videos => "videos",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AdvertisementKind::CardPoints => "Card points",
            AdvertisementKind::Cards => "Cards",
            AdvertisementKind::Posters => "Posters",
            AdvertisementKind::SliderCards => "Slider cards",
            AdvertisementKind::Videos => "Videos",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.path() == path)
    }

    pub fn needs_image(&self) -> bool {
        matches!(
            self,
            AdvertisementKind::Cards | AdvertisementKind::Posters | AdvertisementKind::SliderCards
        )
    }

    pub fn needs_video(&self) -> bool {
        matches!(self, AdvertisementKind::Videos)
    }

    pub fn has_schedule(&self) -> bool {
        matches!(self, AdvertisementKind::Posters)
    }
}

/// Рекламный материал (карточка, постер, слайд, видео)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Advertisement {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub link: String,
    /// URL of the stored image, if any
    pub image: Option<String>,
    /// URL of the stored video, if any
    pub video: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub status: RecordStatus,
    pub created_at: Option<String>,
}

impl Record for Advertisement {
    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> Option<&str> {
        self.created_at.as_deref()
    }

    fn status(&self) -> Option<RecordStatus> {
        Some(self.status)
    }
}

/// Text part of an advertisement create/update request.
/// Files travel next to it as multipart parts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdvertisementDto {
    pub title: String,
    pub description: String,
    pub link: String,
    pub start_date: String,
    pub end_date: String,
    pub status: RecordStatus,
}

impl From<&Advertisement> for AdvertisementDto {
    fn from(a: &Advertisement) -> Self {
        Self {
            title: a.title.clone(),
            description: a.description.clone(),
            link: a.link.clone(),
            start_date: a.start_date.as_deref().map(normalize_input_date).unwrap_or_default(),
            end_date: a.end_date.as_deref().map(normalize_input_date).unwrap_or_default(),
            status: a.status,
        }
    }
}

impl AdvertisementDto {
    /// Text fields as `(name, value)` pairs for a multipart body; empty values are skipped
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("title", self.title.trim().to_string()),
            ("status", self.status.as_str().to_string()),
        ];
        for (name, value) in [
            ("description", &self.description),
            ("link", &self.link),
            ("startDate", &self.start_date),
            ("endDate", &self.end_date),
        ] {
            if !value.trim().is_empty() {
                fields.push((name, value.trim().to_string()));
            }
        }
        fields
    }

    pub fn validate(
        &self,
        kind: AdvertisementKind,
        creating: bool,
        has_image: bool,
        has_video: bool,
    ) -> FieldErrors {
        let mut errors = FieldErrors::new();
        require(&mut errors, "title", &self.title, "Title");
        if kind == AdvertisementKind::CardPoints {
            require(&mut errors, "description", &self.description, "Points");
        }
        if creating && kind.needs_image() && !has_image {
            errors.add("image", "Please select an image");
        }
        if creating && kind.needs_video() && !has_video {
            errors.add("video", "Please select a video");
        }
        if kind.has_schedule() {
            check_date_order(
                &mut errors,
                "end_date",
                &self.start_date,
                &self.end_date,
                "End date cannot be before the start date",
            );
        }
        errors
    }
}
