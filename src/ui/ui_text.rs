use crate::domain::Language;

/// Every translatable label of the widget.
pub struct UiText {
    pub title: &'static str,
    pub select_pair: &'static str,
    pub upload_photo: &'static str,
    pub take_photo: &'static str,
    pub analyze: &'static str,
    pub analyzing: &'static str,
    pub result: &'static str,
    /// Label (and value) of the synthetic first entry in the pair selector
    pub photo_analysis: &'static str,
    pub timeframe: &'static str,
    pub calculator: &'static str,
    pub calculate: &'static str,

    // --- Photo drop zone ---
    pub drop_hint: &'static str,
    pub remove_photo: &'static str,
    pub photo_path_hint: &'static str,
}

pub static UI_TEXT_EN: UiText = UiText {
    title: "AI OptiBotX",
    select_pair: "Select currency pair:",
    upload_photo: "Upload photo for analysis:",
    take_photo: "Take Photo",
    analyze: "Analyze",
    analyzing: "Analyzing...",
    result: "No result yet",
    photo_analysis: "Photo analysis",
    timeframe: "Timeframe:",
    calculator: "Divide by 11:",
    calculate: "Calculate",
    drop_hint: "Drop an image here",
    remove_photo: "✖",
    photo_path_hint: "Path to image, then Enter",
};

pub static UI_TEXT_RU: UiText = UiText {
    title: "AI OptiBotX",
    select_pair: "Выберите валютную пару:",
    upload_photo: "Загрузите фото для анализа:",
    take_photo: "Сфотографировать",
    analyze: "Анализировать",
    analyzing: "Идёт анализ...",
    result: "Результат отсутствует",
    photo_analysis: "Анализ по фото",
    timeframe: "Таймфрейм:",
    calculator: "Деление на 11:",
    calculate: "Рассчитать",
    drop_hint: "Перетащите изображение сюда",
    remove_photo: "✖",
    photo_path_hint: "Путь к изображению, затем Enter",
};

pub fn ui_text(lang: Language) -> &'static UiText {
    match lang {
        Language::En => &UI_TEXT_EN,
        Language::Ru => &UI_TEXT_RU,
    }
}
