//! Host markup contract and the fixed texts the page falls back to.

use std::time::Duration;

// Element ids expected in host markup.
pub const APP_ID: &str = "app";
pub const FALLBACK_JSON_ID: &str = "APP_FALLBACK_JSON";
pub const TOAST_ID: &str = "toast";
pub const AUDIO_ID: &str = "audio";
pub const PLAY_BUTTON_ID: &str = "btnPlay";
pub const CTA_LABEL_ID: &str = "ctaLabel";
pub const BRAND_LOGO_ID: &str = "brandLogo";
pub const PAGE_TITLE_ID: &str = "pageTitle";
pub const PAGE_SUBTITLE_ID: &str = "pageSubtitle";
pub const INTRO_EYEBROW_ID: &str = "introEyebrow";
pub const INTRO_TITLE_ID: &str = "introTitle";
pub const INTRO_LEAD_ID: &str = "introLead";
pub const HERO_IMAGE_ID: &str = "heroImg";
pub const KEYWORDS_ID: &str = "keywords";
pub const CHIPS_HINT_ID: &str = "chipsHint";
pub const EXPLAIN_TITLE_ID: &str = "explainTitle";
pub const EXPLAIN_BLOCKS_ID: &str = "explainBlocks";
pub const TABS_ID: &str = "tabs";
pub const TAB_PANELS_ID: &str = "tabPanels";
pub const EXAMPLES_SECTION_ID: &str = "section-examples";
pub const EXAMPLES_GRID_ID: &str = "examplesGrid";
pub const ROUTINE_SECTION_ID: &str = "section-routine";
pub const ROUTINE_LIST_ID: &str = "routineList";
pub const ROUTINE_TITLE_ID: &str = "routineTitle";
pub const ROUTINE_SUBTITLE_ID: &str = "routineSubtitle";
pub const ROUTINE_TIP_ID: &str = "routineTip";
pub const COPY_YEAR_ID: &str = "copyYear";
pub const COPY_EMAIL_ID: &str = "copyEmail";

// Classes.
pub const ACCORDION_CLASS: &str = "ac";
pub const TAB_CLASS: &str = "tab";
pub const TOAST_VISIBLE_CLASS: &str = "show";
pub const LITE_VIDEO_CLASS: &str = "lite-video";
pub const LITE_IFRAME_CLASS: &str = "lite-iframe";

/// Prefix of every tab panel id; the suffix is the tab key.
pub const PANEL_ID_PREFIX: &str = "panel-";
/// Attribute carrying the video identifier on lazy placeholders.
pub const VIDEO_ID_ATTR: &str = "data-yt";

// Timings.
pub const BLINK_INTERVAL: Duration = Duration::from_millis(1700);
pub const TOAST_TTL: Duration = Duration::from_millis(1800);

// Default texts.
pub const DEFAULT_EMAIL: &str = "imusicala@gmail.com";
pub const DEFAULT_AUDIO_TYPE: &str = "audio/mpeg";
pub const DEFAULT_CTA_IDLE: &str = "Empecemos";
pub const DEFAULT_CTA_ALT: &str = "¡Haz click aquí!";
pub const DEFAULT_CTA_PLAYING: &str = "Pausar";
pub const DEFAULT_EXPLAIN_TITLE: &str = "Explicación detallada";
pub const DEFAULT_ROUTINE_TITLE: &str = "Cómo aplicarlo en tu rutina";
pub const DEFAULT_EYEBROW: &str = "Introducción";
pub const DEFAULT_INTRO_TITLE: &str = "Título de sección";
pub const SECTION_LABEL: &str = "Sección";
pub const STEP_LABEL: &str = "Paso";
pub const TIP_LABEL: &str = "Consejo:";

// Toast messages.
pub const MSG_AUDIO_PLAYING: &str = "▶ Audio reproduciéndose";
pub const MSG_AUDIO_PAUSED: &str = "⏸ Audio en pausa";
pub const MSG_AUDIO_BLOCKED: &str = "Activa el sonido del navegador para escuchar";
pub const MSG_VIDEO_PLAYING: &str = "▶ Reproduciendo video";

// Embedded player.
pub const VIDEO_EMBED_BASE: &str = "https://www.youtube-nocookie.com/embed/";
pub const VIDEO_EMBED_QUERY: &str = "autoplay=1&rel=0&modestbranding=1&playsinline=1";
pub const VIDEO_IFRAME_TITLE: &str = "Video YouTube — Musicala";
pub const VIDEO_IFRAME_ALLOW: &str = "accelerometer; autoplay; clipboard-write; encrypted-media; \
                                      gyroscope; picture-in-picture; web-share";
