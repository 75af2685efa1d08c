//! Test fixtures - reusable content constants for tests.

pub const START_MARKER: &str = "/*! -- START OF PLACED HTML -- */";
pub const END_MARKER: &str = "/*! -- END OF PLACED HTML -- */";

/// A small component template
pub const CARD_HTML: &str = r#"<div class="card">
  <slot name="title"></slot>
</div>"#;

/// Script that has never had html placed into it
pub const CARD_SCRIPT: &str = r#"class Card extends HTMLElement {
  connectedCallback() {
    this.attachShadow({ mode: 'open' }).appendChild(template.content.cloneNode(true));
  }
}
customElements.define('x-card', Card);
"#;

/// Script with a stale placed block in the middle
pub const STALE_SCRIPT: &str = r#"// header
/*! -- START OF PLACED HTML -- */
/*
'place-html' placed the below part by copying the html from `card.html`.
01 Jan, 2020 at 00:00:00 (+0000)
*/
const template = document.createElement('template');
template.innerHTML = `
<p>old</p>
`;
/*! -- END OF PLACED HTML -- */
// footer
"#;
