//! Template engine for rendering the wizard, loading and preview pages.

use std::collections::BTreeMap;

use chrono::Datelike;
use minijinja::{context, Environment};
use serde::Serialize;

use educraft_core::{
    Carousel, ConfigForm, DateBadge, FormErrors, GeneratedContent, SchoolConfig, SchoolEvent,
    SchoolType, Testimonial, DESKTOP_MIN_WIDTH, TABLET_MIN_WIDTH,
};

/// Scroll offset (px) past which the back-to-top button appears.
pub const BACK_TO_TOP_THRESHOLD_PX: u32 = 300;

/// Seconds between refreshes of the loading page when no live socket is connected.
pub const LOADING_REFRESH_SECS: u32 = 3;

/// Page-level rendering options shared by every template.
#[derive(Debug, Clone, Serialize)]
pub struct PageOptions {
    /// Base URL for assets and form actions
    pub base_url: String,

    /// Rendered inside the studio (shows the preview bar with "Start Over")
    pub studio: bool,

    /// Script URL for live state notifications, if any
    pub live_events: Option<String>,

    /// Year printed in the footer
    pub year: i32,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            base_url: "/".to_string(),
            studio: false,
            live_events: None,
            year: chrono::Local::now().year(),
        }
    }
}

/// An event card with its date badge resolved.
#[derive(Debug, Serialize)]
struct EventView<'a> {
    #[serde(flatten)]
    event: &'a SchoolEvent,
    badge: DateBadge,
}

/// A testimonial card.
#[derive(Debug, Serialize)]
struct TestimonialView<'a> {
    #[serde(flatten)]
    testimonial: &'a Testimonial,
    long: bool,
}

#[derive(Debug, Serialize)]
struct SchoolTypeOption {
    slug: &'static str,
    label: &'static str,
}

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the built-in templates.
    pub fn new() -> Self {
        let mut env = Environment::new();

        env.add_template_owned("base.html".to_string(), BASE_TEMPLATE.to_string())
            .expect("Failed to add base template");

        env.add_template_owned("preview.html".to_string(), PREVIEW_TEMPLATE.to_string())
            .expect("Failed to add preview template");

        env.add_template_owned("wizard.html".to_string(), WIZARD_TEMPLATE.to_string())
            .expect("Failed to add wizard template");

        env.add_template_owned("loading.html".to_string(), LOADING_TEMPLATE.to_string())
            .expect("Failed to add loading template");

        Self { env }
    }

    /// Render the marketing page for a school and its generated content.
    pub fn render_preview(
        &self,
        school: &SchoolConfig,
        content: &GeneratedContent,
        options: &PageOptions,
    ) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("preview.html")?;

        let events: Vec<EventView<'_>> = content
            .events
            .iter()
            .map(|event| EventView {
                event,
                badge: event.date_badge(),
            })
            .collect();

        let testimonials: Vec<TestimonialView<'_>> = content
            .testimonials
            .iter()
            .map(|testimonial| TestimonialView {
                testimonial,
                long: testimonial.is_long(),
            })
            .collect();

        // Narrowest viewport; the page script re-derives this on load.
        let carousel = Carousel::for_width(testimonials.len(), 0);

        tmpl.render(context! {
            school => school,
            school_type => school.school_type.label(),
            initial => school.initial(),
            email_slug => school.email_slug(),
            content => content,
            events => events,
            testimonials => testimonials,
            carousel_pages => carousel.page_count(),
            carousel_current => carousel.current(),
            carousel_offset => carousel.offset_percent(),
            breakpoints => context! {
                tablet => TABLET_MIN_WIDTH,
                desktop => DESKTOP_MIN_WIDTH,
            },
            back_to_top_threshold => BACK_TO_TOP_THRESHOLD_PX,
            base_url => &options.base_url,
            studio => options.studio,
            live_events => &options.live_events,
            year => options.year,
        })
    }

    /// Render the configuration wizard.
    pub fn render_wizard(
        &self,
        form: &ConfigForm,
        errors: Option<&FormErrors>,
        banner: Option<&str>,
        options: &PageOptions,
    ) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("wizard.html")?;

        let field_errors: BTreeMap<&str, &str> = errors
            .map(|e| {
                e.errors
                    .iter()
                    .map(|fe| (fe.field, fe.message.as_str()))
                    .collect()
            })
            .unwrap_or_default();

        let school_types: Vec<SchoolTypeOption> = SchoolType::ALL
            .into_iter()
            .map(|t| SchoolTypeOption {
                slug: t.slug(),
                label: t.label(),
            })
            .collect();

        tmpl.render(context! {
            form => form,
            errors => field_errors,
            error => banner,
            school_types => school_types,
            base_url => &options.base_url,
            live_events => &options.live_events,
        })
    }

    /// Render the page shown while content is being generated.
    pub fn render_loading(
        &self,
        school: &SchoolConfig,
        options: &PageOptions,
    ) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("loading.html")?;

        tmpl.render(context! {
            school => school,
            refresh_secs => LOADING_REFRESH_SECS,
            base_url => &options.base_url,
            live_events => &options.live_events,
        })
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

const BASE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  {% block head %}{% endblock %}
  <title>{% block title %}EduCraft{% endblock %}</title>
  <link rel="stylesheet" href="{{ base_url }}assets/main.css">
</head>
<body class="{% block body_class %}{% endblock %}"{% block body_attrs %}{% endblock %}>
  {% block body %}{% endblock %}
  {% if live_events %}<script src="{{ live_events }}"></script>{% endif %}
</body>
</html>"##;

const PREVIEW_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block title %}{{ school.name }}{% endblock %}
{% block body_class %}site{% endblock %}
{% block body_attrs %} style="--brand-primary: {{ school.primaryColor }}; --brand-secondary: {{ school.secondaryColor }};"{% endblock %}

{% block body %}
{% if studio %}
<div class="preview-bar">
  <span class="preview-bar-title">EduCraft Preview Mode</span>
  <form method="post" action="{{ base_url }}reset">
    <button type="submit" class="preview-bar-button" aria-label="Start Over with new school configuration">Start Over</button>
  </form>
</div>
<div class="preview-bar-spacer"></div>
{% endif %}

<div class="topbar">
  <div class="container topbar-inner">
    <div class="topbar-contact">
      <span>&#9742; (555) 123-4567</span>
      <span>&#9993; contact@{{ email_slug }}.edu</span>
    </div>
    <div class="topbar-social">
      <a href="https://facebook.com" target="_blank" rel="noopener noreferrer" aria-label="Visit our Facebook page">Facebook</a>
      <a href="https://twitter.com" target="_blank" rel="noopener noreferrer" aria-label="Visit our Twitter profile">Twitter</a>
      <a href="https://instagram.com" target="_blank" rel="noopener noreferrer" aria-label="Visit our Instagram profile">Instagram</a>
    </div>
  </div>
</div>

<header class="site-header{% if studio %} site-header-studio{% endif %}">
  <div class="container site-header-inner">
    <div class="brand">
      <div class="brand-logo bg-primary">{{ initial }}</div>
      <div>
        <h1 class="brand-name">{{ school.name }}</h1>
        <p class="brand-motto text-secondary">{{ school.motto }}</p>
      </div>
    </div>
    <nav class="site-nav" aria-label="Main Navigation">
      <a href="#">Home</a>
      <a href="#about">About</a>
      <a href="#academics">Academics</a>
      <a href="#events">Events</a>
      <a href="#contact" class="nav-cta bg-primary">Apply Now</a>
    </nav>
  </div>
</header>

<section class="hero" aria-label="Hero Section">
  <img class="hero-image" src="https://picsum.photos/1920/1080?blur=2" alt="School Campus View">
  <div class="hero-overlay"></div>
  <div class="container hero-body">
    <h2 class="hero-headline">{{ content.heroHeadline }}</h2>
    <p class="hero-subheadline">{{ content.heroSubheadline }}</p>
    <div class="hero-actions">
      <a href="#academics" class="button bg-primary">Explore Programs</a>
      <a href="#about" class="button button-ghost">Virtual Tour</a>
    </div>
  </div>
</section>

<section id="about" class="section section-white" aria-labelledby="about-heading">
  <div class="container about-grid">
    <div>
      <div class="eyebrow">Our Philosophy</div>
      <h3 id="about-heading" class="section-title">Educating for the Future</h3>
      <p class="lead">{{ content.missionStatement }}</p>
      <p class="body-text">{{ content.aboutText }}</p>
      <ul class="highlights">
        {% for item in content.academicHighlights %}
        <li class="highlight"><span class="highlight-dot bg-secondary"></span>{{ item }}</li>
        {% endfor %}
      </ul>
    </div>
    <div class="principal">
      <div class="principal-backdrop bg-secondary"></div>
      <div class="principal-card">
        <div class="principal-header">
          <img src="https://picsum.photos/100/100?random=1" class="avatar avatar-lg" alt="Principal {{ content.principalName }}">
          <div>
            <h4 class="principal-title">Principal's Welcome</h4>
            <p class="muted">{{ content.principalName }}</p>
          </div>
        </div>
        <p class="principal-message border-primary">{{ content.principalMessage }}</p>
      </div>
    </div>
  </div>
</section>

<section id="academics" class="stats bg-primary" aria-label="School Statistics">
  <div class="container stats-grid">
    <div><div class="stat-value">100%</div><div class="stat-label">College Acceptance</div></div>
    <div><div class="stat-value">25:1</div><div class="stat-label">Student-Teacher Ratio</div></div>
    <div><div class="stat-value">50+</div><div class="stat-label">Extracurriculars</div></div>
    <div><div class="stat-value">Top 10</div><div class="stat-label">Regional Ranking</div></div>
  </div>
</section>

<section id="events" class="section section-muted" aria-labelledby="events-heading">
  <div class="container">
    <div class="section-head">
      <div>
        <h3 id="events-heading" class="section-title">Campus Life</h3>
        <p class="muted">Stay updated with what is happening at {{ school.name }}</p>
      </div>
      <a href="#events" class="text-link text-primary">View All Events &rarr;</a>
    </div>
    <div class="card-grid">
      {% for event in events %}
      <article class="event-card">
        <div class="event-stripe {% if loop.index0 == 1 %}bg-secondary{% else %}bg-primary{% endif %}"></div>
        <div class="event-body">
          <div class="event-meta">
            <div class="date-badge">
              <span class="date-month">{{ event.badge.month }}</span>
              {% if event.badge.day %}<span class="date-day">{{ event.badge.day }}</span>{% endif %}
            </div>
            <span class="pill">Event</span>
          </div>
          <h4 class="event-title">{{ event.title }}</h4>
          <p class="event-description">{{ event.description }}</p>
          <div class="event-date">&#128197; {{ event.date }}</div>
        </div>
      </article>
      {% endfor %}
    </div>
  </div>
</section>

<section class="section section-white" aria-labelledby="faculty-heading">
  <div class="container section-intro">
    <h3 id="faculty-heading" class="section-title">Meet Our Faculty</h3>
    <p class="muted">Our dedicated team of educators are passionate about inspiring the next generation.</p>
  </div>
  <div class="container card-grid">
    {% for member in content.faculty %}
    <div class="faculty-member">
      <img src="https://picsum.photos/200/200?random={{ loop.index0 + 10 }}" alt="{{ member.name }}" class="avatar avatar-xl">
      <h4 class="faculty-name">{{ member.name }}</h4>
      <p class="faculty-role text-secondary">{{ member.role }}</p>
      <p class="faculty-bio">{{ member.bio }}</p>
    </div>
    {% endfor %}
  </div>
</section>

{% if testimonials %}
<section class="section section-muted" aria-labelledby="testimonials-heading">
  <div class="container">
    <div class="section-intro">
      <h3 id="testimonials-heading" class="section-title">Student Voices</h3>
      <p class="muted">Hear what our community has to say about their experience.</p>
    </div>
    <div class="carousel" data-carousel data-tablet="{{ breakpoints.tablet }}" data-desktop="{{ breakpoints.desktop }}" data-current="{{ carousel_current }}">
      <div class="carousel-viewport">
        <div class="carousel-track" style="transform: translateX(-{{ carousel_offset }}%)">
          {% for t in testimonials %}
          <div class="carousel-slide">
            <figure class="testimonial">
              <blockquote class="testimonial-quote{% if t.long %} clamped{% endif %}">&ldquo;{{ t.quote }}&rdquo;</blockquote>
              {% if t.long %}<button type="button" class="read-more" data-read-more aria-expanded="false">Read More</button>{% endif %}
              <figcaption class="testimonial-author">
                <img src="https://picsum.photos/100/100?random={{ loop.index0 + 100 }}" alt="{{ t.name }} avatar" class="avatar">
                <div>
                  <div class="testimonial-name">{{ t.name }}</div>
                  <div class="testimonial-role">{{ t.role }}</div>
                </div>
              </figcaption>
            </figure>
          </div>
          {% endfor %}
        </div>
      </div>
      <button type="button" class="carousel-arrow carousel-prev" data-carousel-prev aria-label="Previous testimonial">&lsaquo;</button>
      <button type="button" class="carousel-arrow carousel-next" data-carousel-next aria-label="Next testimonial">&rsaquo;</button>
      <div class="carousel-dots" data-carousel-dots>
        {% for page in range(carousel_pages) %}<button type="button" class="carousel-dot{% if page == carousel_current %} active{% endif %}" data-index="{{ page }}" aria-label="Go to slide {{ page + 1 }}"></button>{% endfor %}
      </div>
    </div>
  </div>
</section>
{% endif %}

<section id="contact" class="cta" aria-label="Call to Action">
  <div class="container cta-body">
    <h2 class="cta-title">Join the {{ school.name }} Family</h2>
    <p class="cta-text">Begin your journey towards excellence today. Schedule a visit or apply online.</p>
    <a href="mailto:admissions@{{ email_slug }}.edu" class="button button-pill bg-secondary">Apply for Admission</a>
  </div>
</section>

<footer class="site-footer">
  <div class="container footer-grid">
    <div>
      <div class="footer-name">{{ school.name }}</div>
      <p class="footer-kind">{{ school_type }}</p>
      <p class="footer-text">{{ content.footerText }}</p>
    </div>
    <div>
      <h5 class="footer-heading">Quick Links</h5>
      <ul class="footer-links">
        <li><a href="#contact">Admissions</a></li>
        <li><a href="#contact">Tuition &amp; Fees</a></li>
        <li><a href="#contact">Campus Map</a></li>
        <li><a href="#contact">Careers</a></li>
      </ul>
    </div>
    <div>
      <h5 class="footer-heading">Academics</h5>
      <ul class="footer-links">
        <li><a href="#academics">Curriculum</a></li>
        <li><a href="#academics">Library</a></li>
        <li><a href="#academics">Athletics</a></li>
        <li><a href="#academics">Arts</a></li>
      </ul>
    </div>
    <div>
      <h5 class="footer-heading">Contact Us</h5>
      <ul class="footer-contact">
        <li>{{ school.location }}</li>
        <li>(555) 123-4567</li>
        <li>admissions@{{ email_slug }}.edu</li>
      </ul>
    </div>
  </div>
  <div class="container footer-legal">&copy; {{ year }} {{ school.name }}. All rights reserved. Generated by EduCraft.</div>
</footer>

<button type="button" class="back-to-top bg-primary" data-back-to-top data-threshold="{{ back_to_top_threshold }}" aria-label="Back to top" hidden>&uarr;</button>
<script src="{{ base_url }}assets/main.js"></script>
{% endblock %}"##;

const WIZARD_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block title %}EduCraft: School Configuration{% endblock %}
{% block body_class %}wizard-page{% endblock %}

{% block body %}
{% if error %}
<div class="alert" role="alert"><strong>Error: </strong><span>{{ error }}</span></div>
{% endif %}
<div class="wizard">
  <div class="wizard-aside">
    <h1>Build Your School's Legacy</h1>
    <p>Enter your institution's details and let our AI architect design a professional website in seconds.</p>
  </div>
  <div class="wizard-main">
    <h2>School Configuration</h2>
    <form method="post" action="{{ base_url }}generate" class="wizard-form">
      <div class="field field-wide">
        <label for="name">School Name</label>
        <input type="text" id="name" name="name" required placeholder="e.g. Springfield Academy" value="{{ form.name }}">
        {% if errors.name %}<p class="field-error">{{ errors.name }}</p>{% endif %}
      </div>
      <div class="field">
        <label for="type">Institution Type</label>
        <select id="type" name="type">
          {% for option in school_types %}
          <option value="{{ option.slug }}"{% if option.slug == form.type %} selected{% endif %}>{{ option.label }}</option>
          {% endfor %}
        </select>
        {% if errors.type %}<p class="field-error">{{ errors.type }}</p>{% endif %}
      </div>
      <div class="field">
        <label for="location">Location</label>
        <input type="text" id="location" name="location" required placeholder="e.g. Boston, MA" value="{{ form.location }}">
        {% if errors.location %}<p class="field-error">{{ errors.location }}</p>{% endif %}
      </div>
      <div class="field field-wide">
        <label for="motto">Motto / Slogan</label>
        <input type="text" id="motto" name="motto" required placeholder="e.g. Excellence in Education" value="{{ form.motto }}">
        {% if errors.motto %}<p class="field-error">{{ errors.motto }}</p>{% endif %}
      </div>
      <div class="field">
        <label for="primaryColor">Primary Brand Color</label>
        <input type="color" id="primaryColor" name="primaryColor" value="{{ form.primaryColor }}">
        {% if errors.primaryColor %}<p class="field-error">{{ errors.primaryColor }}</p>{% endif %}
      </div>
      <div class="field">
        <label for="secondaryColor">Secondary Accent Color</label>
        <input type="color" id="secondaryColor" name="secondaryColor" value="{{ form.secondaryColor }}">
        {% if errors.secondaryColor %}<p class="field-error">{{ errors.secondaryColor }}</p>{% endif %}
      </div>
      <button type="submit" class="wizard-submit">Generate Website &rarr;</button>
    </form>
  </div>
</div>
{% endblock %}"##;

const LOADING_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block head %}<meta http-equiv="refresh" content="{{ refresh_secs }}">{% endblock %}
{% block title %}Generating {{ school.name }}{% endblock %}
{% block body_class %}loading-page{% endblock %}

{% block body %}
<div class="loading">
  <div class="spinner" aria-hidden="true"></div>
  <h2>Constructing Your Campus</h2>
  <p>Our AI architects are laying the foundation for {{ school.name }}...</p>
</div>
{% endblock %}"##;
