//! Inline style constants for the preview surface.

pub const PREVIEW_ROOT: &str = "display:flex; flex-direction:column; align-items:center; gap:12px;";

pub const CARD_STAGE: &str = "width:420px; height:240px; border-radius:12px; overflow:hidden; \
     box-shadow:0 8px 24px rgba(0,0,0,0.25); cursor:pointer; background:#23232a;";

pub const CARD_SKELETON: &str = "width:100%; height:100%; display:flex; align-items:center; \
     justify-content:center; color:#8e8e93; font-size:13px; background:#2c2c33;";

pub const SIDE_SELECTOR: &str = "display:flex; gap:8px;";

pub const SIDE_BTN: &str = "padding:4px 16px; border:1px solid #44444c; border-radius:16px; \
     background:transparent; color:#8e8e93; cursor:pointer;";

pub const SIDE_BTN_ACTIVE: &str = "padding:4px 16px; border:1px solid #c9a227; border-radius:16px; \
     background:#c9a227; color:#101014; cursor:pointer;";
