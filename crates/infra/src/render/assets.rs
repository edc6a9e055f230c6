//! Static stylesheet and script embedded in every page

pub const STYLESHEET: &str = r#"
:root { --primary: #4f46e5; --secondary: #0ea5e9; --text: #1f2937; --muted: #6b7280; --surface: #ffffff; --bg: #f3f4f6; }
* { box-sizing: border-box; }
body { margin: 0; font-family: system-ui, -apple-system, "Segoe UI", sans-serif; background: var(--bg); color: var(--text); }
.hidden { display: none !important; }
.login-section { min-height: 100vh; display: flex; align-items: center; justify-content: center; }
.login-card { background: var(--surface); padding: 2.5rem; border-radius: 12px; width: 100%; max-width: 380px; box-shadow: 0 10px 30px rgba(0,0,0,.08); }
.login-card h1 { margin-top: 0; font-size: 1.5rem; }
.login-card label { display: block; font-size: .85rem; color: var(--muted); margin: 1rem 0 .35rem; }
.login-card input { width: 100%; padding: .65rem .75rem; border: 1px solid #d1d5db; border-radius: 8px; font-size: 1rem; }
.login-btn { margin-top: 1.5rem; width: 100%; padding: .75rem; border: 0; border-radius: 8px; background: var(--primary); color: #fff; font-size: 1rem; cursor: pointer; }
.login-btn:disabled { opacity: .6; cursor: progress; }
.error-message { margin-top: 1rem; padding: .65rem .75rem; border-radius: 8px; background: #fee2e2; color: #991b1b; font-size: .9rem; }
.alert { margin: 1rem auto; max-width: 1100px; padding: .75rem 1rem; border-radius: 8px; background: #fef3c7; color: #92400e; }
.loading-section { min-height: 100vh; display: flex; align-items: center; justify-content: center; color: var(--muted); }
.profile-section { max-width: 1100px; margin: 0 auto; padding: 2rem 1rem; }
.profile-header { display: flex; justify-content: space-between; align-items: center; }
.logout-btn { padding: .5rem 1rem; border: 1px solid #d1d5db; border-radius: 8px; background: var(--surface); cursor: pointer; }
.stats { display: grid; grid-template-columns: repeat(auto-fill, minmax(180px, 1fr)); gap: 1rem; margin: 1.5rem 0; }
.stat { background: var(--surface); border-radius: 10px; padding: 1rem; }
.stat .label { font-size: .8rem; color: var(--muted); text-transform: uppercase; letter-spacing: .04em; }
.stat .value { font-size: 1.35rem; font-weight: 600; margin-top: .25rem; word-break: break-word; }
.groups { display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 1rem; }
.groups section, .chart-card { background: var(--surface); border-radius: 10px; padding: 1rem 1.25rem; }
.groups ul { margin: .5rem 0 0; padding-left: 1.1rem; }
.charts { display: grid; gap: 1.5rem; margin-top: 1.5rem; }
.chart-card svg { width: 100%; height: auto; }
.chart-placeholder { display: flex; align-items: center; justify-content: center; color: var(--muted); margin: 0 auto; }
.tooltip-data { display: none; }
.chart-tooltip { position: fixed; pointer-events: none; background: rgba(17,24,39,.92); color: #fff; padding: .5rem .65rem; border-radius: 6px; font-size: .8rem; z-index: 10; }
.chart-tooltip strong { display: block; margin-bottom: .2rem; }
.chart-tooltip span { display: block; }
[data-marker] { cursor: pointer; transition: r .12s ease; }
"#;

/// Busy state on submit and pointer-positioned chart tooltips.
pub const SCRIPT: &str = r#"
(function () {
  var form = document.getElementById("loginForm");
  if (form) {
    form.addEventListener("submit", function () {
      var button = form.querySelector(".login-btn");
      if (button) {
        button.disabled = true;
        button.innerHTML = "<span>Signing In...</span>";
      }
    });
  }

  var tooltip = document.getElementById("chartTooltip");
  if (!tooltip) { return; }

  document.querySelectorAll(".chart-card").forEach(function (card) {
    var data = card.querySelector(".tooltip-data");
    card.querySelectorAll("[data-marker]").forEach(function (marker) {
      var entry = data && data.querySelector('[data-marker-id="' + marker.getAttribute("data-marker") + '"]');
      if (!entry) { return; }
      var resting = marker.getAttribute("data-r");
      var hover = entry.getAttribute("data-hover-r");

      marker.addEventListener("mouseenter", function () {
        tooltip.innerHTML = entry.innerHTML;
        tooltip.classList.remove("hidden");
        if (hover) { marker.setAttribute("r", hover); }
      });
      marker.addEventListener("mousemove", function (event) {
        tooltip.style.left = (event.clientX + 12) + "px";
        tooltip.style.top = (event.clientY + 12) + "px";
      });
      marker.addEventListener("mouseleave", function () {
        tooltip.classList.add("hidden");
        if (resting) { marker.setAttribute("r", resting); }
      });
    });
  });
})();
"#;
