use crate::html::html_escape;
use landing_kit_core::{Location, Service, SiteConfig};

/// Lead-capture form markup, optionally pre-filled with the page's
/// service/location context via hidden fields.
///
/// Required-field enforcement is the `required` attribute plus the same
/// check in lead-form.js before the submitting state is entered; input
/// types carry the only format hints.
pub fn lead_form_html(
    service: Option<&Service>,
    location: Option<&Location>,
    site: &SiteConfig,
) -> String {
    let service_value = service.map(|s| html_escape(&s.name)).unwrap_or_default();
    let location_value = location.map(|l| html_escape(&l.name)).unwrap_or_default();

    format!(
        r#"            <form class="lead" data-lead-form novalidate>
                <input type="hidden" id="service" value="{service_value}">
                <input type="hidden" id="location" value="{location_value}">
                <label for="name">Full Name *</label>
                <input type="text" id="name" required placeholder="John Smith">
                <label for="phone">Phone Number *</label>
                <input type="tel" id="phone" required placeholder="(555) 123-4567">
                <label for="email">Email Address *</label>
                <input type="email" id="email" required placeholder="john@example.com">
                <label for="accidentDate">Date of Accident</label>
                <input type="date" id="accidentDate">
                <label for="description">Tell Us About Your Case *</label>
                <textarea id="description" rows="4" required placeholder="Please describe your accident and injuries..."></textarea>
                <button type="submit">Get Your Free Case Review</button>
                <p class="form-error" data-form-error></p>
                <p style="text-align:center;font-size:0.85rem;color:#64748b;margin-top:0.75rem">
                    Or call us directly at <a href="tel:{phone}">{phone_formatted}</a>
                </p>
            </form>
            <div class="form-thanks" data-form-thanks>
                <h3>Thank You!</h3>
                <p>Your case information has been received. One of our attorneys will contact you within 24 hours.</p>
                <p>For immediate assistance, call us at <a href="tel:{phone}"><strong>{phone_formatted}</strong></a></p>
            </div>
"#,
        service_value = service_value,
        location_value = location_value,
        phone = site.phone,
        phone_formatted = site.phone_formatted,
    )
}

/// Generate the client-side form driver shipped as lead-form.js.
///
/// States: editing -> submitting -> submitted, forward-only. The submit
/// control is disabled the moment submitting starts, so a second
/// submission cannot begin before the first resolves. On static hosting
/// with no intake backend the POST fails at the network layer and the
/// form falls back to a delayed local accept, matching the original
/// simulated behavior.
pub fn lead_form_js() -> String {
    r#"// Generated by landing-kit. Do not edit by hand.
(function () {
  'use strict';

  const FALLBACK_DELAY_MS = 1000;
  const REQUIRED = ['name', 'phone', 'email', 'description'];

  function fieldValue(form, id) {
    const el = form.querySelector('#' + id);
    return el ? el.value.trim() : '';
  }

  function leadFromForm(form) {
    const lead = {
      name: fieldValue(form, 'name'),
      phone: fieldValue(form, 'phone'),
      email: fieldValue(form, 'email'),
      description: fieldValue(form, 'description'),
    };
    const accidentDate = fieldValue(form, 'accidentDate');
    if (accidentDate) lead.accidentDate = accidentDate;
    const service = fieldValue(form, 'service');
    if (service) lead.service = service;
    const location = fieldValue(form, 'location');
    if (location) lead.location = location;
    return lead;
  }

  function wire(form) {
    let state = 'editing';
    const button = form.querySelector('button[type="submit"]');
    const error = form.querySelector('[data-form-error]');
    const thanks = form.parentElement.querySelector('[data-form-thanks]');

    function showThanks() {
      state = 'submitted';
      form.style.display = 'none';
      if (thanks) thanks.style.display = 'block';
    }

    function showError(message) {
      if (error) {
        error.textContent = message;
        error.style.display = 'block';
      }
    }

    form.addEventListener('submit', function (event) {
      event.preventDefault();
      if (state !== 'editing') return;

      const lead = leadFromForm(form);
      const missing = REQUIRED.filter(function (f) { return !lead[f]; });
      if (missing.length > 0) {
        showError('Please fill in: ' + missing.join(', '));
        return;
      }

      state = 'submitting';
      button.disabled = true;
      button.textContent = 'Submitting...';
      if (error) error.style.display = 'none';

      fetch('/api/lead', {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify(lead),
      })
        .then(function (response) {
          if (!response.ok) throw new Error('rejected:' + response.status);
          showThanks();
        })
        .catch(function (err) {
          if (String(err.message).indexOf('rejected:') === 0) {
            state = 'failed';
            button.textContent = 'Get Your Free Case Review';
            showError('Something went wrong sending your information. Please call us instead.');
            return;
          }
          // No intake backend reachable (static hosting): accept locally
          // after a fixed delay.
          setTimeout(showThanks, FALLBACK_DELAY_MS);
        });
    });
  }

  document.addEventListener('DOMContentLoaded', function () {
    document.querySelectorAll('form[data-lead-form]').forEach(wire);
  });
})();
"#
    .to_string()
}
