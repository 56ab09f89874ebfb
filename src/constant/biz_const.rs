/// environment variable
pub const LOCAL_ENVIRONMENT: &str = "local";
pub const PRODUCTION_ENVIRONMENT: &str = "production";
pub const APP_ENVIRONMENT: &str = "APP_ENVIRONMENT";
pub const TELEGRAM_BOT_TOKEN: &str = "TELEGRAM_BOT_TOKEN";

/// request body limit of the contact form, in bytes
pub const FORM_PAYLOAD_LIMIT: usize = 64 * 1024;

/// validate client's name and phone
pub const MIN_NAME_LENGTH: usize = 2;
pub const MIN_PHONE_LENGTH: usize = 10;
/// Optional country code (`+7`, `7` or `8`), a mobile prefix digit, then 9 more digits.
pub const PHONE_PATTERN: &str = r"^(\+7|7|8)?[489][0-9]{9}$";

/// telegram notification
pub const TIMESTAMP_FORMAT: &str = "%d.%m.%Y %H:%M";
pub const EMPTY_MESSAGE_PLACEHOLDER: &str = "Не указано";
pub const PARSE_MODE_HTML: &str = "HTML";

/// user facing messages
pub const SCHOOL_NAME: &str = "LVR Языковая школа";
pub const FORM_SENT_MESSAGE: &str =
    "Заявка успешно отправлена! Мы свяжемся с вами в ближайшее время.";
pub const MISSING_DATA_MESSAGE: &str = "Данные не получены";
pub const MISSING_NAME_MESSAGE: &str = "Имя обязательно для заполнения";
pub const NAME_TOO_SHORT_MESSAGE: &str = "Имя должно содержать минимум 2 символа";
pub const MISSING_PHONE_MESSAGE: &str = "Телефон обязателен для заполнения";
pub const INVALID_PHONE_MESSAGE: &str = "Пожалуйста, введите корректный номер телефона";
pub const RELAY_FAILURE_MESSAGE: &str = "Ошибка отправки заявки. Попробуйте позже.";
pub const INTERNAL_ERROR_MESSAGE: &str = "Внутренняя ошибка сервера";
pub const HEALTH_MESSAGE: &str = "LVR API работает";
