//! Global CSS styles for the portfolio page.
//!
//! Dark single-column layout. `.reveal` elements start faded and shifted
//! down; the reveal controller adds `.reveal--visible` to bring them in.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Surfaces */
  --bg: #0b0d12;
  --bg-raised: #12151d;
  --border: #1f2430;

  /* Accent */
  --accent: #5eead4;
  --accent-glow: rgba(94, 234, 212, 0.25);

  /* Text */
  --text-primary: #e8eaf0;
  --text-secondary: rgba(232, 234, 240, 0.72);
  --text-muted: rgba(232, 234, 240, 0.5);

  /* Typography */
  --font-sans: 'Inter', system-ui, -apple-system, 'Segoe UI', sans-serif;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-reveal: 700ms cubic-bezier(0.2, 0.7, 0.2, 1);
  --reveal-step: 120ms;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  scroll-behavior: smooth;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  background: var(--bg);
  color: var(--text-primary);
  line-height: 1.65;
}

a {
  color: inherit;
  text-decoration: none;
}

.container {
  max-width: 960px;
  margin: 0 auto;
  padding: 0 1.5rem;
}

/* === Navigation === */
.nav {
  position: sticky;
  top: 0;
  z-index: 10;
  background: rgba(11, 13, 18, 0.85);
  backdrop-filter: blur(8px);
  border-bottom: 1px solid var(--border);
}

.nav-inner {
  display: flex;
  gap: 1.5rem;
  padding-top: 0.9rem;
  padding-bottom: 0.9rem;
  font-size: 0.9rem;
}

.nav-inner a {
  color: var(--text-secondary);
  transition: color var(--transition-fast);
}

.nav-inner a:hover {
  color: var(--accent);
}

/* === Hero === */
.hero {
  display: flex;
  flex-direction: column;
  align-items: center;
  text-align: center;
  gap: 0.75rem;
  padding-top: 4rem;
  padding-bottom: 3rem;
}

.profile-pic {
  width: 128px;
  height: 128px;
  border-radius: 50%;
  object-fit: cover;
  border: 2px solid var(--accent);
  box-shadow: 0 0 30px var(--accent-glow);
}

.name {
  font-size: 2rem;
  font-weight: 700;
}

.tagline {
  max-width: 640px;
  color: var(--text-secondary);
}

.links {
  display: flex;
  gap: 0.75rem;
  margin-top: 0.5rem;
}

/* === Chips === */
.chip {
  position: relative;
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 40px;
  height: 40px;
  border-radius: 50%;
  border: 1px solid var(--border);
  background: var(--bg-raised);
  color: var(--text-secondary);
  transition: color var(--transition-fast), border-color var(--transition-fast), transform var(--transition-fast);
}

.chip svg {
  width: 18px;
  height: 18px;
}

.chip:hover {
  color: var(--accent);
  border-color: var(--accent);
  transform: translateY(-2px);
}

.chip[data-tooltip]:hover::after {
  content: attr(data-tooltip);
  position: absolute;
  top: calc(100% + 8px);
  left: 50%;
  transform: translateX(-50%);
  white-space: nowrap;
  font-size: 0.75rem;
  padding: 0.25rem 0.5rem;
  border-radius: 6px;
  background: var(--bg-raised);
  border: 1px solid var(--border);
  color: var(--text-primary);
}

/* === Sections === */
section {
  padding: 3rem 0;
}

.kicker {
  text-transform: uppercase;
  letter-spacing: 0.12em;
  font-size: 0.75rem;
  color: var(--accent);
}

h2 {
  font-size: 1.5rem;
  margin: 0.25rem 0 1.25rem;
}

.grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
  gap: 1rem;
}

.card {
  padding: 1.25rem;
  border-radius: 12px;
  border: 1px solid var(--border);
  background: var(--bg-raised);
  color: var(--text-secondary);
}

.card ul {
  margin-top: 0.5rem;
  padding-left: 1.1rem;
}

.job-title, .card-title {
  font-weight: 600;
  color: var(--text-primary);
}

.pills {
  margin-top: 10px;
}

.pill {
  display: inline-block;
  margin: 0 0.4rem 0.4rem 0;
  padding: 0.2rem 0.65rem;
  border-radius: 999px;
  border: 1px solid var(--border);
  font-size: 0.8rem;
}

/* === Contact === */
.contact-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
  gap: 1rem;
}

.contact-item {
  display: flex;
  align-items: center;
  gap: 0.6rem;
  color: var(--text-secondary);
}

.contact-item svg {
  width: 18px;
  height: 18px;
  color: var(--accent);
}

/* === Footer === */
footer {
  padding: 2rem 0 3rem;
  text-align: center;
  font-size: 0.85rem;
  color: var(--text-muted);
}

.accent {
  color: var(--accent);
}

/* === Reveal === */
.reveal {
  opacity: 0;
  transform: translateY(24px);
  transition: opacity var(--transition-reveal), transform var(--transition-reveal);
}

.reveal--visible {
  opacity: 1;
  transform: none;
}

.delay-1 { transition-delay: var(--reveal-step); }
.delay-2 { transition-delay: calc(var(--reveal-step) * 2); }
.delay-3 { transition-delay: calc(var(--reveal-step) * 3); }

@media (prefers-reduced-motion: reduce) {
  .reveal {
    transition: none;
  }
}
"#;
