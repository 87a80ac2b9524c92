use crate::domain::{Feature, MaskModel, VideoRef};

pub const APP_NAME: &str = "FITSIZ";
pub const APP_VERSION: &str = "1.0.0";

pub const ASSISTANT_BOT: &str = "fitsiz_assistant_bot";
pub const SUPPORT_BOT: &str = "fitsiz_support_bot";

const fn model(name: &'static str, video_id: u64) -> MaskModel {
    MaskModel {
        name,
        video: VideoRef {
            video_id,
            hash: None,
        },
    }
}

pub const MASK_MODELS: [MaskModel; 5] = [
    model("ELEMENT STATIC", 456239193),
    model("EXPAN HD ULTRA", 456239191),
    model("ELEMENT HD COLOR", 456239190),
    model("ELEMENT CLASSIC", 456239189),
    model("ELEMENT ARGON", 456239188),
];

pub const FEATURES: [Feature; 3] = [
    Feature {
        title: "Видеоинструкции",
        description: "Настройка всех моделей масок",
    },
    Feature {
        title: "ИИ-ассистент",
        description: "Консультация по любым вопросам",
    },
    Feature {
        title: "Техподдержка 24/7",
        description: "Помощь в любое время",
    },
];
