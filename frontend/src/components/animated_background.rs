use stylist::yew::styled_component;
use yew::prelude::*;

const DOT_PATTERN: &str = "data:image/svg+xml;base64,PHN2ZyB3aWR0aD0iNjAiIGhlaWdodD0iNjAiIHZpZXdCb3g9IjAgMCA2MCA2MCIgeG1sbnM9Imh0dHA6Ly93d3cudzMub3JnLzIwMDAvc3ZnIj48ZyBmaWxsPSJub25lIiBmaWxsLXJ1bGU9ImV2ZW5vZGQiPjxnIGZpbGw9IiMwRUE1RTkiIGZpbGwtb3BhY2l0eT0iMC4wMyI+PHBhdGggZD0iTTM2IDE2YzAtMi4yMDkgMS43OTEtNCA0LTRzNCAxLjc5MSA0IDQtMS43OTEgNC00IDQtNC0xLjc5MS00LTR6bTAgMjBjMC0yLjIwOSAxLjc5MS00IDQtNHM0IDEuNzkxIDQgNC0xLjc5MSA0LTQgNC00LTEuNzkxLTQtNHptMCAyMGMwLTIuMjA5IDEuNzkxLTQgNC00czQgMS43OTEgNCA0LTEuNzkxIDQtNCA0LTQtMS43OTEtNC00ek0xNiAxNmMwLTIuMjA5IDEuNzkxLTQgNC00czQgMS43OTEgNCA0LTEuNzkxIDQtNCA0LTQtMS43OTEtNC00em0wIDIwYzAtMi4yMDkgMS43OTEtNCA0LTRzNCAxLjc5MSA0IDQtMS43OTEgNC00IDQtNC0xLjc5MS00LTR6bTAgMjBjMC0yLjIwOSAxLjc5MS00IDQtNHM0IDEuNzkxIDQgNC0xLjc5MSA0LTQgNC00LTEuNzkxLTQtNHoiLz48L2c+PC9nPjwvc3ZnPg==";

/// (class, animation delay) for each drifting blob.
const BLOBS: [(&str, &str); 3] = [
    ("blob blob-blue", "0s"),
    ("blob blob-cyan", "2s"),
    ("blob blob-sky", "4s"),
];

#[styled_component(AnimatedBackground)]
pub fn animated_background() -> Html {
    let layer = css!(
        r#"
        position: fixed;
        top: 0;
        right: 0;
        bottom: 0;
        left: 0;
        z-index: -10;
        overflow: hidden;
        background: linear-gradient(135deg, #eff6ff 0%, #ffffff 50%, #ecfeff 100%);
        "#
    );
    let dots = css!(
        r#"
        position: absolute;
        top: 0;
        right: 0;
        bottom: 0;
        left: 0;
        opacity: 0.4;
        background-image: ${pattern};
        "#,
        pattern = format!("url(\"{}\")", DOT_PATTERN)
    );

    html! {
        <div class={layer} aria-hidden="true">
            { for BLOBS.iter().map(|(class, delay)| html! {
                <div class={*class} style={format!("animation-delay: {};", delay)}></div>
            }) }
            <div class={dots}></div>
        </div>
    }
}
