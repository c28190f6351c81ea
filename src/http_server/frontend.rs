//! Embedded HTML/CSS/JS frontend for the codexplain form.
//!
//! The entire page is compiled into the binary as a string constant.
//! No external assets, no build tools, no CDN dependencies.
//!
//! Rendering is a pure function of four pieces of state: code text,
//! detail level, in-flight flag, and the last explanation or error. The
//! submit button is disabled while code is empty or a request is in
//! flight; that disabled state is the only concurrency guard.

use axum::{response::Html, routing::get, Router};

/// Create the page route
pub fn page_routes() -> Router {
    Router::new().route("/", get(index_handler))
}

async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// The complete single-page form HTML.
pub const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Code Explainer</title>
<style>
:root {
  --bg: #f3f4f6;
  --surface: #ffffff;
  --border: #d1d5db;
  --text: #111827;
  --text-muted: #6b7280;
  --accent: #3b82f6;
  --accent-hover: #2563eb;
  --red: #dc2626;
  --red-bg: #fef2f2;
  --red-border: #fecaca;
  --radius: 8px;
  --font: -apple-system, BlinkMacSystemFont, 'Segoe UI', Helvetica, Arial, sans-serif;
  --mono: 'SF Mono', 'Cascadia Code', 'Fira Code', monospace;
}

* { margin: 0; padding: 0; box-sizing: border-box; }
body {
  background: var(--bg);
  color: var(--text);
  font-family: var(--font);
  font-size: 14px;
  line-height: 1.5;
  min-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 32px 16px;
}

.app { max-width: 960px; width: 100%; }

h1 {
  font-size: 40px;
  font-weight: 700;
  text-align: center;
  margin-bottom: 32px;
}

textarea {
  width: 100%;
  height: 280px;
  padding: 16px;
  font-family: var(--mono);
  font-size: 13px;
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  resize: vertical;
}

textarea:focus { outline: none; border-color: var(--accent); }

.controls {
  display: flex;
  align-items: center;
  gap: 12px;
  margin: 16px 0;
}

.controls label { font-weight: 500; }

select {
  padding: 8px 12px;
  border: 1px solid var(--border);
  border-radius: var(--radius);
  background: var(--surface);
  font-size: 13px;
}

button {
  width: 100%;
  padding: 12px;
  border: none;
  border-radius: var(--radius);
  background: var(--accent);
  color: #fff;
  font-size: 14px;
  font-weight: 500;
  cursor: pointer;
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 10px;
  transition: background 0.15s, opacity 0.15s;
}

button:hover:not(:disabled) { background: var(--accent-hover); }
button:disabled { opacity: 0.5; cursor: not-allowed; }

.spinner {
  width: 16px;
  height: 16px;
  border: 2px solid rgba(255,255,255,0.4);
  border-top-color: #fff;
  border-radius: 50%;
  animation: spin 0.6s linear infinite;
}

@keyframes spin { to { transform: rotate(360deg); } }

.panel {
  margin-top: 24px;
  padding: 20px;
  border-radius: var(--radius);
  display: none;
}

.panel.visible { display: block; }

#error-panel {
  background: var(--red-bg);
  border: 1px solid var(--red-border);
  color: var(--red);
}

#explanation-panel {
  background: var(--surface);
  border: 1px solid var(--border);
}

#explanation-panel h2 {
  font-size: 18px;
  font-weight: 600;
  margin-bottom: 12px;
}

#explanation-text { white-space: pre-wrap; }
</style>
</head>
<body>
<div class="app">
  <h1>Code Explainer</h1>

  <textarea id="code-input" placeholder="Paste your code here..." aria-label="Code input"></textarea>

  <div class="controls">
    <label for="detail-level">Explanation Detail:</label>
    <select id="detail-level">
      <option value="brief">Brief</option>
      <option value="medium" selected>Medium</option>
      <option value="detailed">Detailed</option>
    </select>
  </div>

  <button id="explain-btn" disabled>Explain Code</button>

  <div class="panel" id="error-panel"></div>

  <div class="panel" id="explanation-panel">
    <h2>Explanation:</h2>
    <div id="explanation-text"></div>
  </div>
</div>

<script>
// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------
let inFlight = false;

const codeInput = document.getElementById('code-input');
const detailSelect = document.getElementById('detail-level');
const explainBtn = document.getElementById('explain-btn');
const errorPanel = document.getElementById('error-panel');
const explanationPanel = document.getElementById('explanation-panel');
const explanationText = document.getElementById('explanation-text');

// ---------------------------------------------------------------------------
// Rendering (pure function of state)
// ---------------------------------------------------------------------------
function render(explanation, error) {
  explainBtn.disabled = inFlight || codeInput.value.trim() === '';
  explainBtn.innerHTML = inFlight
    ? '<span class="spinner"></span>Getting Explanation...'
    : 'Explain Code';

  errorPanel.textContent = error || '';
  errorPanel.className = 'panel' + (error ? ' visible' : '');

  explanationText.textContent = explanation || '';
  explanationPanel.className = 'panel' + (explanation ? ' visible' : '');
}

codeInput.addEventListener('input', () => {
  explainBtn.disabled = inFlight || codeInput.value.trim() === '';
});

// ---------------------------------------------------------------------------
// Submit
// ---------------------------------------------------------------------------
async function explainCode() {
  if (inFlight || codeInput.value.trim() === '') return;

  inFlight = true;
  render('', '');

  try {
    const response = await fetch('/api/explain', {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify({
        code: codeInput.value,
        detailLevel: detailSelect.value
      })
    });

    const data = await response.json();

    if (!response.ok) {
      throw new Error(data.error || 'Failed to get explanation');
    }

    inFlight = false;
    render(data.explanation, '');
  } catch (error) {
    inFlight = false;
    render('', error.message || 'Failed to get explanation. Please try again.');
  }
}

explainBtn.addEventListener('click', explainCode);
</script>
</body>
</html>"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_routes_build() {
        let _router = page_routes();
    }

    #[test]
    fn test_page_posts_to_explain_endpoint() {
        assert!(INDEX_HTML.contains("/api/explain"));
        assert!(INDEX_HTML.contains("detailLevel"));
    }

    #[test]
    fn test_page_offers_all_detail_levels() {
        for level in ["brief", "medium", "detailed"] {
            assert!(INDEX_HTML.contains(&format!("value=\"{}\"", level)));
        }
        // medium is preselected
        assert!(INDEX_HTML.contains("value=\"medium\" selected"));
    }

    #[test]
    fn test_submit_guard_markers() {
        // Button starts disabled and the guard covers empty code and in-flight
        assert!(INDEX_HTML.contains("id=\"explain-btn\" disabled"));
        assert!(INDEX_HTML.contains("inFlight || codeInput.value.trim() === ''"));
    }

    #[test]
    fn test_result_panels_present() {
        assert!(INDEX_HTML.contains("id=\"error-panel\""));
        assert!(INDEX_HTML.contains("id=\"explanation-panel\""));
        assert!(INDEX_HTML.contains("Getting Explanation..."));
    }
}
