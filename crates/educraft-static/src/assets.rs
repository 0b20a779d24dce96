//! Asset pipeline for CSS and JavaScript processing.

/// Asset pipeline utilities.
pub struct AssetPipeline;

impl AssetPipeline {
    /// Generate the main CSS file.
    pub fn generate_css() -> String {
        DEFAULT_CSS.to_string()
    }

    /// Generate the main JavaScript file.
    pub fn generate_js() -> String {
        DEFAULT_JS.to_string()
    }

    /// Minify CSS using lightningcss.
    pub fn minify_css(css: &str) -> Result<String, String> {
        use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

        let stylesheet = StyleSheet::parse(css, ParserOptions::default())
            .map_err(|e| format!("CSS parse error: {}", e))?;

        let minified = stylesheet
            .to_css(PrinterOptions {
                minify: true,
                ..Default::default()
            })
            .map_err(|e| format!("CSS minify error: {}", e))?;

        Ok(minified.code)
    }
}

// Brand colors arrive as --brand-primary / --brand-secondary on <body>.
const DEFAULT_CSS: &str = r#"/* EduCraft site theme */

:root {
  --brand-primary: #1e40af;
  --brand-secondary: #eab308;
  --slate-50: #f8fafc;
  --slate-100: #f1f5f9;
  --slate-200: #e2e8f0;
  --slate-300: #cbd5e1;
  --slate-400: #94a3b8;
  --slate-500: #64748b;
  --slate-600: #475569;
  --slate-700: #334155;
  --slate-800: #1e293b;
  --slate-900: #0f172a;
  --slate-950: #020617;
  --indigo: #4f46e5;
  --radius: 0.75rem;
  --bar-height: 3.5rem;
  --font-serif: Georgia, "Times New Roman", serif;
}

* {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: system-ui, -apple-system, "Segoe UI", sans-serif;
  background: var(--slate-50);
  color: var(--slate-900);
  line-height: 1.6;
}

a {
  color: inherit;
  text-decoration: none;
}

img {
  display: block;
  max-width: 100%;
}

.container {
  width: 100%;
  max-width: 1200px;
  margin: 0 auto;
  padding: 0 1rem;
}

.muted {
  color: var(--slate-500);
}

/* Brand color utilities */
.bg-primary {
  background-color: var(--brand-primary);
  color: #ffffff;
}

.bg-secondary {
  background-color: var(--brand-secondary);
}

.text-primary {
  color: var(--brand-primary);
}

.text-secondary {
  color: var(--brand-secondary);
}

.border-primary {
  border-color: var(--brand-primary);
}

/* Preview bar */
.preview-bar {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  height: var(--bar-height);
  z-index: 50;
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 0 1.5rem;
  background: var(--slate-900);
  color: #ffffff;
  box-shadow: 0 2px 6px rgba(0, 0, 0, 0.2);
}

.preview-bar-title {
  font-size: 0.8rem;
  font-weight: 700;
  letter-spacing: 0.08em;
  text-transform: uppercase;
  color: var(--slate-400);
}

.preview-bar-button {
  border: 0;
  border-radius: 0.25rem;
  padding: 0.5rem 1rem;
  font-size: 0.75rem;
  color: #ffffff;
  background: var(--slate-700);
  cursor: pointer;
}

.preview-bar-button:hover {
  background: var(--slate-600);
}

.preview-bar-spacer {
  height: var(--bar-height);
}

/* Top bar */
.topbar {
  padding: 0.5rem 0;
  font-size: 0.85rem;
  color: var(--slate-600);
  background: var(--slate-100);
  border-bottom: 1px solid var(--slate-200);
}

.topbar-inner,
.topbar-contact,
.topbar-social {
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  gap: 1.5rem;
}

.topbar-inner {
  justify-content: space-between;
}

.topbar-social a:hover {
  color: var(--slate-900);
}

/* Header */
.site-header {
  position: sticky;
  top: 0;
  z-index: 40;
  background: #ffffff;
  box-shadow: 0 1px 3px rgba(0, 0, 0, 0.08);
}

.site-header-studio {
  top: var(--bar-height);
}

.site-header-inner {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding-top: 1rem;
  padding-bottom: 1rem;
}

.brand {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.brand-logo {
  width: 3rem;
  height: 3rem;
  border-radius: 0.5rem;
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 1.5rem;
  font-weight: 700;
}

.brand-name {
  font-size: 1.25rem;
  line-height: 1.2;
}

.brand-motto {
  font-size: 0.75rem;
  font-weight: 600;
  letter-spacing: 0.08em;
  text-transform: uppercase;
}

.site-nav {
  display: none;
  align-items: center;
  gap: 2rem;
  font-weight: 500;
  color: var(--slate-700);
}

.site-nav a:hover {
  color: var(--indigo);
}

.site-nav .nav-cta {
  padding: 0.5rem 1.25rem;
  border-radius: 9999px;
  font-weight: 600;
}

.site-nav .nav-cta:hover {
  color: #ffffff;
  opacity: 0.9;
}

/* Hero */
.hero {
  position: relative;
  display: flex;
  align-items: center;
  justify-content: center;
  height: 500px;
  overflow: hidden;
  color: #ffffff;
  text-align: center;
}

.hero-image,
.hero-overlay {
  position: absolute;
  inset: 0;
  width: 100%;
  height: 100%;
}

.hero-image {
  object-fit: cover;
}

.hero-overlay {
  background: rgba(0, 0, 0, 0.6);
}

.hero-body {
  position: relative;
  z-index: 1;
}

.hero-headline {
  max-width: 56rem;
  margin: 0 auto 1.5rem;
  font-family: var(--font-serif);
  font-size: 2.5rem;
  line-height: 1.15;
}

.hero-subheadline {
  max-width: 42rem;
  margin: 0 auto 2.5rem;
  font-size: 1.25rem;
  color: var(--slate-200);
}

.hero-actions {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 1rem;
}

.button {
  display: inline-block;
  padding: 1rem 2rem;
  border-radius: 0.25rem;
  font-size: 1.1rem;
  font-weight: 600;
  box-shadow: 0 6px 16px rgba(0, 0, 0, 0.15);
  transition: transform 0.15s, opacity 0.15s;
}

.button:hover {
  transform: translateY(-2px);
}

.button-ghost {
  color: #ffffff;
  border: 1px solid #ffffff;
  background: rgba(255, 255, 255, 0.1);
}

.button-pill {
  border-radius: 9999px;
  color: var(--slate-900);
  font-weight: 700;
}

/* Sections */
.section {
  padding: 5rem 0;
}

.section-white {
  background: #ffffff;
}

.section-muted {
  background: var(--slate-50);
}

.section-title {
  margin-bottom: 1rem;
  font-family: var(--font-serif);
  font-size: 2rem;
  color: var(--slate-900);
}

.section-intro {
  max-width: 42rem;
  margin: 0 auto 3rem;
  text-align: center;
}

.section-head {
  display: flex;
  flex-wrap: wrap;
  align-items: flex-end;
  justify-content: space-between;
  gap: 1rem;
  margin-bottom: 3rem;
}

.text-link {
  font-size: 0.9rem;
  font-weight: 700;
}

.text-link:hover {
  text-decoration: underline;
}

.eyebrow {
  display: inline-block;
  margin-bottom: 1rem;
  padding: 0.25rem 0.75rem;
  border-radius: 0.25rem;
  font-size: 0.75rem;
  font-weight: 700;
  letter-spacing: 0.08em;
  text-transform: uppercase;
  color: var(--slate-600);
  background: var(--slate-100);
}

.lead {
  margin-bottom: 1.5rem;
  font-size: 1.15rem;
  color: var(--slate-600);
}

.body-text {
  margin-bottom: 2rem;
  color: var(--slate-600);
}

/* About */
.about-grid {
  display: grid;
  grid-template-columns: 1fr;
  gap: 4rem;
  align-items: center;
}

.highlights {
  display: flex;
  flex-wrap: wrap;
  gap: 1rem;
  list-style: none;
}

.highlight {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.5rem 1rem;
  border: 1px solid var(--slate-100);
  border-radius: 9999px;
  font-weight: 500;
  color: var(--slate-700);
  background: var(--slate-50);
}

.highlight-dot {
  width: 0.5rem;
  height: 0.5rem;
  border-radius: 9999px;
}

.principal {
  position: relative;
}

.principal-backdrop {
  position: absolute;
  inset: 0;
  border-radius: 1rem;
  transform: translate(1rem, 1rem);
}

.principal-card {
  position: relative;
  padding: 2.5rem;
  border: 1px solid var(--slate-100);
  border-radius: 1rem;
  background: var(--slate-50);
  box-shadow: 0 20px 40px rgba(0, 0, 0, 0.12);
}

.principal-header {
  display: flex;
  align-items: center;
  gap: 1rem;
  margin-bottom: 1.5rem;
}

.principal-title {
  font-size: 1.25rem;
}

.principal-message {
  padding-left: 1rem;
  border-left: 4px solid var(--brand-primary);
  font-style: italic;
  color: var(--slate-600);
}

.avatar {
  width: 3rem;
  height: 3rem;
  flex-shrink: 0;
  border-radius: 9999px;
  object-fit: cover;
  background: var(--slate-200);
}

.avatar-lg {
  width: 4rem;
  height: 4rem;
  border: 2px solid #ffffff;
}

.avatar-xl {
  width: 8rem;
  height: 8rem;
  margin: 0 auto 1.5rem;
  border: 4px solid var(--slate-50);
  box-shadow: 0 10px 20px rgba(0, 0, 0, 0.1);
}

/* Stats */
.stats {
  padding: 4rem 0;
  text-align: center;
}

.stats-grid {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: 2rem;
}

.stat-value {
  margin-bottom: 0.5rem;
  font-size: 2.25rem;
  font-weight: 700;
}

.stat-label {
  font-size: 0.85rem;
  letter-spacing: 0.05em;
  text-transform: uppercase;
  opacity: 0.8;
}

/* Cards */
.card-grid {
  display: grid;
  grid-template-columns: 1fr;
  gap: 2rem;
}

.event-card {
  overflow: hidden;
  border: 1px solid var(--slate-100);
  border-radius: var(--radius);
  background: #ffffff;
  box-shadow: 0 1px 3px rgba(0, 0, 0, 0.06);
  transition: box-shadow 0.2s;
}

.event-card:hover {
  box-shadow: 0 8px 20px rgba(0, 0, 0, 0.1);
}

.event-stripe {
  height: 0.5rem;
}

.event-body {
  padding: 1.5rem;
}

.event-meta {
  display: flex;
  align-items: flex-start;
  justify-content: space-between;
  margin-bottom: 1rem;
}

.date-badge {
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  width: 3.5rem;
  height: 3.5rem;
  border-radius: 0.5rem;
  font-weight: 700;
  color: var(--slate-700);
  background: var(--slate-100);
}

.date-month {
  font-size: 0.75rem;
  text-transform: uppercase;
}

.date-day {
  font-size: 1.25rem;
  line-height: 1;
}

.pill {
  padding: 0.25rem 0.75rem;
  border-radius: 9999px;
  font-size: 0.75rem;
  font-weight: 500;
  color: #1d4ed8;
  background: #eff6ff;
}

.event-title {
  margin-bottom: 0.75rem;
  font-size: 1.25rem;
}

.event-description {
  margin-bottom: 1rem;
  font-size: 0.9rem;
  color: var(--slate-500);
}

.event-date {
  font-size: 0.85rem;
  color: var(--slate-400);
}

.faculty-member {
  text-align: center;
}

.faculty-name {
  font-size: 1.1rem;
}

.faculty-role {
  margin-bottom: 0.75rem;
  font-size: 0.85rem;
  font-weight: 500;
  letter-spacing: 0.05em;
  text-transform: uppercase;
}

.faculty-bio {
  max-width: 20rem;
  margin: 0 auto;
  font-size: 0.9rem;
  color: var(--slate-500);
}

/* Testimonials carousel */
.carousel {
  position: relative;
  max-width: 80rem;
  margin: 0 auto;
}

.carousel-viewport {
  overflow: hidden;
}

.carousel-track {
  display: flex;
  transition: transform 0.5s ease-in-out;
}

.carousel-slide {
  flex: 0 0 100%;
  min-width: 0;
  padding: 0.5rem 1rem;
}

.testimonial {
  display: flex;
  flex-direction: column;
  height: 100%;
  padding: 2rem;
  border: 1px solid var(--slate-100);
  border-radius: var(--radius);
  background: #ffffff;
  box-shadow: 0 1px 3px rgba(0, 0, 0, 0.06);
  transition: transform 0.3s, box-shadow 0.3s;
}

.testimonial:hover {
  transform: translateY(-0.5rem);
  box-shadow: 0 20px 40px rgba(0, 0, 0, 0.12);
}

.testimonial-quote {
  flex-grow: 1;
  margin-bottom: 1rem;
  font-style: italic;
  color: var(--slate-600);
}

.testimonial-quote.clamped {
  display: -webkit-box;
  -webkit-line-clamp: 3;
  -webkit-box-orient: vertical;
  overflow: hidden;
}

.read-more {
  align-self: flex-start;
  margin-bottom: 1.5rem;
  border: 0;
  font-size: 0.75rem;
  font-weight: 700;
  color: var(--indigo);
  background: none;
  cursor: pointer;
}

.testimonial-author {
  display: flex;
  align-items: center;
  gap: 1rem;
  margin-top: auto;
}

.testimonial-name {
  font-size: 0.9rem;
  font-weight: 700;
}

.testimonial-role {
  font-size: 0.75rem;
  text-transform: uppercase;
  color: var(--slate-500);
}

.carousel-arrow {
  display: none;
  position: absolute;
  top: 50%;
  z-index: 1;
  width: 2.5rem;
  height: 2.5rem;
  border: 1px solid var(--slate-100);
  border-radius: 9999px;
  font-size: 1.5rem;
  line-height: 1;
  color: var(--slate-600);
  background: #ffffff;
  box-shadow: 0 4px 12px rgba(0, 0, 0, 0.12);
  cursor: pointer;
}

.carousel-arrow:hover {
  color: var(--indigo);
}

.carousel-prev {
  left: 0;
  transform: translate(-3rem, -50%);
}

.carousel-next {
  right: 0;
  transform: translate(3rem, -50%);
}

.carousel-dots {
  display: flex;
  justify-content: center;
  gap: 0.5rem;
  margin-top: 2rem;
}

.carousel-dot {
  width: 0.625rem;
  height: 0.625rem;
  border: 0;
  border-radius: 9999px;
  background: var(--slate-300);
  cursor: pointer;
}

.carousel-dot.active {
  background: var(--indigo);
}

/* Call to action */
.cta {
  padding: 5rem 0;
  color: #ffffff;
  background: var(--slate-900);
}

.cta-body {
  text-align: center;
}

.cta-title {
  margin-bottom: 1.5rem;
  font-family: var(--font-serif);
  font-size: 2rem;
}

.cta-text {
  max-width: 42rem;
  margin: 0 auto 2.5rem;
  font-size: 1.25rem;
  color: var(--slate-300);
}

/* Footer */
.site-footer {
  padding: 3rem 0;
  font-size: 0.9rem;
  color: var(--slate-400);
  background: var(--slate-950);
  border-top: 1px solid var(--slate-800);
}

.footer-grid {
  display: grid;
  grid-template-columns: 1fr;
  gap: 3rem;
  margin-bottom: 3rem;
}

.footer-name {
  margin-bottom: 0.5rem;
  font-size: 1.25rem;
  font-weight: 700;
  color: #ffffff;
}

.footer-kind {
  margin-bottom: 1rem;
  font-size: 0.75rem;
  letter-spacing: 0.08em;
  text-transform: uppercase;
}

.footer-heading {
  margin-bottom: 1.5rem;
  font-size: 1rem;
  color: #ffffff;
}

.footer-links,
.footer-contact {
  display: grid;
  gap: 0.75rem;
  list-style: none;
}

.footer-links a:hover {
  color: #818cf8;
}

.footer-legal {
  padding-top: 2rem;
  border-top: 1px solid var(--slate-800);
  font-size: 0.75rem;
  text-align: center;
}

.back-to-top {
  position: fixed;
  right: 2rem;
  bottom: 2rem;
  z-index: 50;
  width: 3rem;
  height: 3rem;
  border: 0;
  border-radius: 9999px;
  font-size: 1.25rem;
  box-shadow: 0 6px 16px rgba(0, 0, 0, 0.2);
  cursor: pointer;
}

.back-to-top[hidden] {
  display: none;
}

/* Wizard */
.wizard-page {
  display: flex;
  align-items: center;
  justify-content: center;
  min-height: 100vh;
  padding: 1rem;
}

.alert {
  position: fixed;
  top: 1rem;
  right: 1rem;
  z-index: 50;
  max-width: 28rem;
  padding: 0.75rem 1rem;
  border: 1px solid #f87171;
  border-radius: 0.25rem;
  color: #b91c1c;
  background: #fee2e2;
  box-shadow: 0 6px 16px rgba(0, 0, 0, 0.12);
}

.wizard {
  display: flex;
  flex-direction: column;
  width: 100%;
  max-width: 56rem;
  overflow: hidden;
  border-radius: 1rem;
  background: #ffffff;
  box-shadow: 0 20px 40px rgba(0, 0, 0, 0.12);
}

.wizard-aside {
  padding: 2rem;
  color: #ffffff;
  background: var(--indigo);
}

.wizard-aside h1 {
  margin-bottom: 1rem;
  font-size: 1.75rem;
}

.wizard-aside p {
  color: #e0e7ff;
}

.wizard-main {
  padding: 2rem;
}

.wizard-main h2 {
  margin-bottom: 1.5rem;
  font-size: 1.5rem;
  color: var(--slate-800);
}

.wizard-form {
  display: grid;
  grid-template-columns: 1fr;
  gap: 1.5rem;
}

.field label {
  display: block;
  margin-bottom: 0.25rem;
  font-size: 0.85rem;
  font-weight: 500;
  color: var(--slate-700);
}

.field input[type="text"],
.field select {
  display: block;
  width: 100%;
  padding: 0.75rem;
  border: 1px solid var(--slate-300);
  border-radius: 0.5rem;
  font: inherit;
  background: #ffffff;
}

.field input[type="color"] {
  width: 5rem;
  height: 2.5rem;
  padding: 0.25rem;
  border: 1px solid var(--slate-300);
  border-radius: 0.25rem;
  cursor: pointer;
}

.field-error {
  margin-top: 0.25rem;
  font-size: 0.8rem;
  color: #b91c1c;
}

.wizard-submit {
  padding: 1rem;
  border: 0;
  border-radius: 0.75rem;
  font-size: 1rem;
  font-weight: 700;
  color: #ffffff;
  background: var(--indigo);
  cursor: pointer;
}

.wizard-submit:hover {
  background: #4338ca;
}

/* Loading */
.loading-page {
  display: flex;
  align-items: center;
  justify-content: center;
  min-height: 100vh;
  background: #ffffff;
}

.loading {
  text-align: center;
}

.loading h2 {
  margin-bottom: 0.5rem;
  font-size: 1.5rem;
  color: var(--slate-800);
}

.loading p {
  color: var(--slate-500);
}

.spinner {
  width: 4rem;
  height: 4rem;
  margin: 0 auto 1rem;
  border: 4px solid #dbeafe;
  border-top-color: #2563eb;
  border-radius: 9999px;
  animation: spin 0.9s linear infinite;
}

@keyframes spin {
  to {
    transform: rotate(360deg);
  }
}

@media (min-width: 768px) {
  .site-nav {
    display: flex;
  }

  .hero {
    height: 600px;
  }

  .hero-headline {
    font-size: 3.75rem;
  }

  .stats-grid {
    grid-template-columns: repeat(4, 1fr);
  }

  .card-grid {
    grid-template-columns: repeat(3, 1fr);
  }

  .carousel-arrow {
    display: block;
  }

  .footer-grid {
    grid-template-columns: repeat(4, 1fr);
  }

  .wizard {
    flex-direction: row;
  }

  .wizard-aside {
    width: 33%;
  }

  .wizard-main {
    width: 67%;
    padding: 3rem;
  }

  .wizard-form {
    grid-template-columns: 1fr 1fr;
  }

  .field-wide,
  .wizard-submit {
    grid-column: span 2;
  }
}

@media (min-width: 1024px) {
  .about-grid {
    grid-template-columns: 1fr 1fr;
  }
}
"#;

// Carousel rules: visible slots from breakpoints, index in [0, max(0, total - visible)],
// wrap at both ends, jumps clamp.
const DEFAULT_JS: &str = r#"// EduCraft site script
(function () {
  'use strict';

  function visibleSlots(width, tablet, desktop) {
    if (width >= desktop) return 3;
    if (width >= tablet) return 2;
    return 1;
  }

  function initCarousel(root) {
    var track = root.querySelector('.carousel-track');
    var slides = root.querySelectorAll('.carousel-slide');
    var dots = root.querySelector('[data-carousel-dots]');
    var tablet = parseInt(root.dataset.tablet, 10) || 768;
    var desktop = parseInt(root.dataset.desktop, 10) || 1024;
    var total = slides.length;
    var visible = 1;
    var current = parseInt(root.dataset.current, 10) || 0;

    function maxIndex() {
      return Math.max(0, total - visible);
    }

    function renderDots() {
      var pages = maxIndex() + 1;
      if (dots.children.length !== pages) {
        dots.innerHTML = '';
        for (var i = 0; i < pages; i++) {
          var dot = document.createElement('button');
          dot.type = 'button';
          dot.className = 'carousel-dot';
          dot.dataset.index = String(i);
          dot.setAttribute('aria-label', 'Go to slide ' + (i + 1));
          dots.appendChild(dot);
        }
      }
      Array.prototype.forEach.call(dots.children, function (dot, i) {
        dot.classList.toggle('active', i === current);
      });
    }

    function render() {
      var width = 100 / visible;
      Array.prototype.forEach.call(slides, function (slide) {
        slide.style.flex = '0 0 ' + width + '%';
      });
      track.style.transform = 'translateX(-' + current * width + '%)';
      renderDots();
    }

    function resize() {
      visible = visibleSlots(window.innerWidth, tablet, desktop);
      current = Math.min(current, maxIndex());
      render();
    }

    root.querySelector('[data-carousel-next]').addEventListener('click', function () {
      current = current >= maxIndex() ? 0 : current + 1;
      render();
    });

    root.querySelector('[data-carousel-prev]').addEventListener('click', function () {
      current = current <= 0 ? maxIndex() : current - 1;
      render();
    });

    dots.addEventListener('click', function (event) {
      var index = event.target.dataset && event.target.dataset.index;
      if (index === undefined) return;
      current = Math.min(parseInt(index, 10), maxIndex());
      render();
    });

    window.addEventListener('resize', resize);
    resize();
  }

  function initBackToTop(button) {
    var threshold = parseInt(button.dataset.threshold, 10) || 300;

    function update() {
      button.hidden = window.scrollY <= threshold;
    }

    button.addEventListener('click', function () {
      window.scrollTo({ top: 0, behavior: 'smooth' });
    });
    window.addEventListener('scroll', update, { passive: true });
    update();
  }

  function initReadMore(button) {
    button.addEventListener('click', function () {
      var quote = button.previousElementSibling;
      var expanded = !quote.classList.toggle('clamped');
      button.setAttribute('aria-expanded', String(expanded));
      button.textContent = expanded ? 'Read Less' : 'Read More';
    });
  }

  document.querySelectorAll('[data-carousel]').forEach(initCarousel);
  document.querySelectorAll('[data-read-more]').forEach(initReadMore);

  var backToTop = document.querySelector('[data-back-to-top]');
  if (backToTop) initBackToTop(backToTop);
})();
"#;
