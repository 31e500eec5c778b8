// Page wiring constants: element ids, selectors and CSS snippets.
//
// The page markup and stylesheet are authored outside this crate; these
// strings are the contract with them.
// Required element ids
pub const CANVAS_ID: &str = "canvas3d";
pub const HEARTS_CONTAINER_ID: &str = "hearts-container";
pub const PANEL_ID: &str = "valentine-card";
pub const CONFIRM_ID: &str = "yes";
pub const DECLINE_ID: &str = "no";

// Selectors
pub const PHOTO_CARD_SELECTOR: &str = ".photo-card";
pub const PHOTO_FRAME_SELECTOR: &str = ".photo-frame";
pub const FADE_SELECTOR: &str = ".fade";
pub const FADE_SHOWN_CLASS: &str = "show";
pub const HEADING_SELECTOR: &str = "h1, h2, h3";
pub const AMBIENT_HEART_CLASS: &str = "heart";

// Shared easing for the explosion and confetti transitions
pub const BURST_EASING: &str = "cubic-bezier(0.25, 0.46, 0.45, 0.94)";

pub const SHAKE_ANIMATION: &str = "shake 0.5s";
pub const SHAKE_KEYFRAMES: &str = "
    @keyframes shake {
        0%, 100% { transform: translateX(0); }
        10%, 30%, 50%, 70%, 90% { transform: translateX(-5px); }
        20%, 40%, 60%, 80% { transform: translateX(5px); }
    }
";

pub const SPARKLE_SHADOW: &str =
    "0 0 20px rgba(255, 79, 129, 0.8), 0 0 40px rgba(255, 79, 129, 0.6)";

// Cursor trail dot
pub const TRAIL_DOT_SIZE: &str = "8px";
pub const TRAIL_DOT_BACKGROUND: &str =
    "radial-gradient(circle, rgba(255,79,129,0.6), transparent)";
pub const TRAIL_DOT_Z: &str = "9998";
pub const TRAIL_FADE_TRANSITION: &str = "all 0.5s ease";

pub const OVERLAY_Z: &str = "10000";

pub const CONFIRMATION_HTML: &str = r#"
    <div class="success-message">
        <h2>You just made me really happy 💖</h2>
        <p>I promise effort, honesty, and choosing you every day.</p>
        <p style="margin-top: 20px; font-size: 18px; opacity: 0.8;">
            Here's to all our moments together... ✨
        </p>
    </div>
"#;
