//! Global stylesheet injected once at the app root

/// Hover, focus, and animation rules that inline styles cannot express
pub const GLOBAL_CSS: &str = r"
body { margin: 0; }
.action-button { transition: background 0.15s; cursor: pointer; }
.action-button:hover { background: #1f2937 !important; }
.search-button:hover { background: #1d4ed8 !important; }
.search-input:focus { box-shadow: 0 0 0 2px #60a5fa; }
.result-card { transition: transform 0.2s; }
.result-card:hover { transform: scale(1.03); }
.page-background {
    background-size: 400% 400% !important;
    animation: gradient-shift 15s ease infinite;
    filter: blur(40px);
    opacity: 0.5;
}
.toast { animation: toast-in 0.2s ease-out; }
@keyframes gradient-shift {
    0% { background-position: 0% 50%; }
    50% { background-position: 100% 50%; }
    100% { background-position: 0% 50%; }
}
@keyframes toast-in {
    from { opacity: 0; transform: translateY(-8px); }
    to { opacity: 1; transform: translateY(0); }
}
";
