//! Global CSS styles for Urban Skate Track.
//!
//! Black-and-white street aesthetic: heavy uppercase headings, square
//! buttons, gray panels.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --ink: #000000;
  --ink-soft: #1f1f1f;
  --paper: #ffffff;
  --paper-dim: #f9fafb;

  --gray-100: #f3f4f6;
  --gray-200: #e5e7eb;
  --gray-300: #d1d5db;
  --gray-400: #9ca3af;
  --gray-600: #4b5563;

  --success: #16a34a;
  --pending: #ca8a04;
  --danger: #dc2626;

  --font-sans: 'Inter', -apple-system, 'Segoe UI', Helvetica, Arial, sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-sans);
  color: var(--ink);
  background: var(--paper);
  line-height: 1.5;
}

a { color: inherit; text-decoration: none; }
button { font: inherit; cursor: pointer; border: none; }
button:disabled { cursor: not-allowed; }

.container {
  max-width: 1200px;
  margin: 0 auto;
  padding: 0 1rem;
}

.page { min-height: 100vh; }
.page--dim { background: var(--paper-dim); }

.page-intro { text-align: center; margin: 3rem 0; }
.page-title {
  font-size: 3rem;
  font-weight: 800;
  letter-spacing: -0.02em;
  margin-bottom: 1rem;
}
.page-lead {
  font-size: 1.25rem;
  color: var(--gray-600);
  max-width: 48rem;
  margin: 0 auto;
}

/* === Buttons === */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  padding: 0.75rem 1.5rem;
  font-weight: 600;
  transition: background var(--transition-fast), color var(--transition-fast);
}
.btn-primary { background: var(--ink); color: var(--paper); }
.btn-primary:hover:not(:disabled) { background: var(--ink-soft); }
.btn-primary:disabled { background: var(--gray-400); }
.btn-secondary { background: var(--gray-200); color: var(--ink); }
.btn-secondary:hover:not(:disabled) { background: var(--gray-300); }
.btn-secondary:disabled { color: var(--gray-400); }
.btn-outline { background: transparent; border: 2px solid var(--ink); color: var(--ink); }
.btn-outline:hover { background: var(--ink); color: var(--paper); }
.btn-large { padding: 1rem 2rem; font-size: 1.125rem; }
.btn-small { padding: 0.4rem 0.9rem; font-size: 0.875rem; }
.btn-success { background: var(--success); color: var(--paper); }

.spinner {
  width: 1.25rem;
  height: 1.25rem;
  border: 2px solid currentColor;
  border-top-color: transparent;
  border-radius: 50%;
  animation: spin 1s linear infinite;
}
.spinner--large { width: 3rem; height: 3rem; border-width: 3px; }
@keyframes spin { to { transform: rotate(360deg); } }

/* === Navigation === */
.site-nav {
  position: sticky;
  top: 0;
  z-index: 50;
  background: rgba(0, 0, 0, 0.9);
  backdrop-filter: blur(12px);
  border-bottom: 1px solid rgba(255, 255, 255, 0.1);
}
.site-nav-inner {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1rem;
  max-width: 1200px;
  margin: 0 auto;
}
.site-logo { color: var(--paper); font-size: 1.5rem; font-weight: 800; }
.site-links { display: flex; gap: 2rem; }
.site-link { color: var(--paper); font-weight: 500; transition: color var(--transition-fast); }
.site-link:hover { color: var(--gray-300); }
.site-link.active { border-bottom: 2px solid var(--paper); }

.menu-toggle {
  display: none;
  background: transparent;
  width: 1.5rem;
  height: 1.5rem;
  flex-direction: column;
  justify-content: center;
  gap: 4px;
}
.menu-toggle span {
  display: block;
  width: 1.5rem;
  height: 2px;
  background: var(--paper);
  transition: transform var(--transition-normal), opacity var(--transition-normal);
}
.menu-toggle.open span:nth-child(1) { transform: translateY(6px) rotate(45deg); }
.menu-toggle.open span:nth-child(2) { opacity: 0; }
.menu-toggle.open span:nth-child(3) { transform: translateY(-6px) rotate(-45deg); }

.mobile-menu { display: none; flex-direction: column; gap: 1rem; padding: 0 1rem 1rem; }
.mobile-menu .site-link { padding: 0.5rem 0; }

@media (max-width: 768px) {
  .site-links { display: none; }
  .menu-toggle { display: flex; }
  .mobile-menu { display: flex; }
  .page-title { font-size: 2.25rem; }
}

/* === Landing === */
.hero {
  background: var(--ink);
  color: var(--paper);
  padding: 8rem 1rem;
  text-align: center;
}
.hero-title { font-size: 4.5rem; font-weight: 900; letter-spacing: -0.03em; }
.hero-tagline { font-size: 1.25rem; color: var(--gray-300); margin: 1.5rem auto 2.5rem; max-width: 40rem; }
.hero-actions { display: flex; gap: 1rem; justify-content: center; flex-wrap: wrap; }
.hero .btn-outline { border-color: var(--paper); color: var(--paper); }
.hero .btn-outline:hover { background: var(--paper); color: var(--ink); }
.hero .btn-primary { background: var(--paper); color: var(--ink); }

.section { padding: 5rem 0; }
.section-title { font-size: 3rem; font-weight: 800; text-align: center; margin-bottom: 1.5rem; }
.section-lead {
  font-size: 1.25rem;
  color: var(--gray-600);
  text-align: center;
  max-width: 48rem;
  margin: 0 auto 4rem;
}

.feature-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
  gap: 2rem;
  margin-bottom: 5rem;
}
.feature-card { background: var(--paper-dim); padding: 1.5rem; text-align: center; }
.feature-card:hover { background: var(--gray-100); }
.feature-card h3 { font-size: 1.25rem; font-weight: 700; margin-bottom: 1rem; }
.feature-card p { color: var(--gray-600); }

.stats-panel { background: var(--ink); color: var(--paper); padding: 4rem 2rem; border-radius: 0.5rem; }
.stats-panel h2 { font-size: 2.25rem; font-weight: 800; text-align: center; }
.stats-panel .stats-lead { text-align: center; color: var(--gray-300); margin: 1rem 0 3rem; }
.stats-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(160px, 1fr)); gap: 2rem; }
.stat { text-align: center; }
.stat-number { font-size: 2.25rem; font-weight: 800; }
.stat-label { font-size: 0.875rem; color: var(--gray-300); text-transform: uppercase; letter-spacing: 0.05em; }

.cta { text-align: center; margin-top: 5rem; }
.cta-actions { display: flex; gap: 1rem; justify-content: center; flex-wrap: wrap; }

/* === Panels === */
.panel { background: var(--paper); border-radius: 0.5rem; box-shadow: 0 1px 2px rgba(0, 0, 0, 0.06); padding: 2rem; }
.panel-dark { background: var(--ink); color: var(--paper); border-radius: 0.5rem; padding: 2rem; }
.panel-dark p { color: var(--gray-300); font-size: 0.875rem; }
.panel-gray { background: var(--gray-100); border-radius: 0.5rem; padding: 2rem; }
.panel-title { font-size: 1.5rem; font-weight: 700; margin-bottom: 1rem; }
.two-col { display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 2rem; }
.three-col { display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 2rem; margin-bottom: 3rem; }
.tile { background: var(--paper); padding: 1.5rem; border-radius: 0.5rem; text-align: center; box-shadow: 0 1px 2px rgba(0, 0, 0, 0.06); }
.tile-value { font-size: 1.875rem; font-weight: 800; margin-bottom: 0.5rem; }
.tile-icon { font-size: 1.875rem; margin-bottom: 1rem; }
.tile p { color: var(--gray-600); font-size: 0.875rem; }
.section-gap { margin-top: 3rem; }

/* === Gallery === */
.category-pills { display: flex; flex-wrap: wrap; gap: 0.5rem; justify-content: center; margin-bottom: 2rem; }
.pill { padding: 0.5rem 1rem; font-size: 0.875rem; font-weight: 500; background: var(--gray-100); color: var(--ink); }
.pill:hover { background: var(--gray-200); }
.pill.selected { background: var(--ink); color: var(--paper); }

.photo-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); gap: 1rem; padding-bottom: 3rem; }
.photo-tile { position: relative; aspect-ratio: 1; overflow: hidden; background: var(--gray-100); cursor: pointer; }
.photo-tile img { width: 100%; height: 100%; object-fit: cover; transition: transform var(--transition-normal); }
.photo-tile:hover img { transform: scale(1.1); }
.photo-caption {
  position: absolute;
  inset: auto 0 0 0;
  padding: 1rem;
  color: var(--paper);
  background: linear-gradient(transparent, rgba(0, 0, 0, 0.6));
  transform: translateY(100%);
  transition: transform var(--transition-normal);
}
.photo-tile:hover .photo-caption { transform: translateY(0); }
.photo-caption h3 { font-size: 0.875rem; font-weight: 600; }
.photo-caption p { font-size: 0.75rem; opacity: 0.8; }
.empty-state { text-align: center; color: var(--gray-600); padding: 3rem 0; }

.modal-overlay {
  position: fixed;
  inset: 0;
  z-index: 100;
  background: rgba(0, 0, 0, 0.8);
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 1rem;
}
.modal { background: var(--paper); max-width: 56rem; width: 100%; max-height: 90vh; overflow: auto; position: relative; }
.modal-close { position: absolute; top: 0.5rem; right: 0.75rem; background: transparent; font-size: 2rem; color: var(--paper); text-shadow: 0 0 4px rgba(0, 0, 0, 0.6); }
.modal img { width: 100%; max-height: 70vh; object-fit: contain; background: var(--ink); }
.modal-body { padding: 1.5rem; }
.modal-body h2 { font-size: 1.5rem; font-weight: 700; margin-bottom: 0.5rem; }
.modal-body p { color: var(--gray-600); margin-bottom: 1rem; }
.modal-meta { display: flex; justify-content: space-between; align-items: center; font-size: 0.875rem; color: var(--gray-600); }
.tag { text-transform: capitalize; background: var(--gray-100); padding: 0.25rem 0.5rem; border-radius: 0.25rem; font-size: 0.75rem; }
.modal-actions { display: flex; gap: 0.5rem; margin-top: 1rem; }

/* === Donation wizard === */
.steps { display: flex; align-items: center; margin-bottom: 2rem; }
.step { display: flex; align-items: center; }
.step--grow { flex: 1; }
.step-dot {
  width: 2.5rem;
  height: 2.5rem;
  border-radius: 50%;
  display: flex;
  align-items: center;
  justify-content: center;
  font-weight: 600;
  background: var(--gray-200);
  color: var(--gray-600);
}
.step-dot.reached { background: var(--ink); color: var(--paper); }
.step-bar { flex: 1; height: 4px; margin: 0 1rem; background: var(--gray-200); }
.step-bar.reached { background: var(--ink); }
.step-caption { text-align: center; margin-bottom: 2rem; }
.step-caption h2 { font-size: 1.5rem; font-weight: 700; }
.step-caption p { color: var(--gray-600); }

.wizard-body { min-height: 300px; }
.wizard-body h3 { font-size: 1.25rem; font-weight: 600; margin-bottom: 0.5rem; }
.wizard-body .hint { color: var(--gray-600); margin-bottom: 1.5rem; }

.amount-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1rem; margin-bottom: 1.5rem; }
.amount-btn { padding: 1rem; border: 2px solid var(--gray-300); background: var(--paper); font-size: 1.125rem; font-weight: 600; }
.amount-btn:hover { border-color: var(--gray-400); }
.amount-btn.selected { border-color: var(--ink); background: var(--ink); color: var(--paper); }

.form-group { margin-bottom: 1.25rem; }
.form-label { display: block; font-size: 0.875rem; font-weight: 500; margin-bottom: 0.5rem; }
.form-input { width: 100%; padding: 0.75rem 1rem; border: 1px solid var(--gray-300); font-size: 1rem; }
.form-input:focus { outline: 2px solid var(--ink); border-color: transparent; }
.input-prefix { position: relative; }
.input-prefix span { position: absolute; left: 0.75rem; top: 50%; transform: translateY(-50%); color: var(--gray-600); }
.input-prefix .form-input { padding-left: 2rem; }
.field-error { color: var(--danger); font-size: 0.875rem; margin-top: 0.25rem; }

.method-option { display: flex; align-items: center; gap: 1rem; padding: 1rem; border: 2px solid var(--gray-300); margin-bottom: 1rem; cursor: pointer; }
.method-option:hover { border-color: var(--gray-400); }
.method-option.selected { border-color: var(--ink); }
.method-option strong { display: block; }
.method-option small { color: var(--gray-600); }

.wizard-nav { display: flex; justify-content: space-between; margin-top: 2rem; padding-top: 1.5rem; border-top: 1px solid var(--gray-200); }
.wizard-thanks { margin-top: 1rem; text-align: center; color: var(--success); font-weight: 600; }

/* === Payment views === */
.payment-view { text-align: center; }
.payment-view h2 { font-size: 1.5rem; font-weight: 700; margin-bottom: 0.5rem; }
.payment-view .hint { color: var(--gray-600); margin-bottom: 2rem; }
.loading { display: flex; flex-direction: column; align-items: center; gap: 1rem; padding: 3rem 0; color: var(--gray-600); }
.qr-frame { display: inline-block; padding: 1rem; border: 1px solid var(--gray-200); margin-bottom: 1.5rem; }
.qr-frame img { width: 200px; height: 200px; display: block; }
.copy-row { display: flex; gap: 0.5rem; text-align: left; }
.copy-row .form-input { font-family: var(--font-mono); font-size: 0.75rem; background: var(--paper-dim); }
.payment-note { font-size: 0.875rem; color: var(--gray-600); margin-top: 1.5rem; }

.wallet-box { background: var(--paper-dim); padding: 1.5rem; border-radius: 0.5rem; margin-bottom: 1.5rem; text-align: left; }
.wallet-head { display: flex; justify-content: space-between; align-items: center; margin-bottom: 0.75rem; }
.wallet-head h3 { font-weight: 600; }
.link-danger { background: transparent; color: var(--danger); font-size: 0.875rem; }
.wallet-line { font-size: 0.875rem; color: var(--gray-600); }
.summary-row { display: flex; justify-content: space-between; font-size: 0.875rem; padding: 0.25rem 0; }
.summary-row strong { font-weight: 600; }
.address-list { font-family: var(--font-mono); font-size: 0.75rem; word-break: break-all; text-align: left; }
.address-list div { margin-top: 0.75rem; }
.status-box { padding: 2rem; border-radius: 0.5rem; margin-top: 1rem; }
.status-box--success { background: #f0fdf4; color: var(--success); }
.status-box--error { background: #fef2f2; color: var(--danger); }
.status-box a { text-decoration: underline; font-family: var(--font-mono); }
.notice { background: #fefce8; border: 1px solid #fde68a; padding: 1rem; border-radius: 0.5rem; font-size: 0.875rem; margin-top: 2rem; text-align: left; }
.notice strong { display: block; margin-bottom: 0.25rem; }
.placeholder-card { border: 2px dashed var(--gray-300); padding: 3rem 2rem; color: var(--gray-600); }

/* === NFT dashboard === */
.wallet-header { display: flex; justify-content: space-between; align-items: center; background: var(--paper-dim); padding: 1.5rem; border-radius: 0.5rem; margin-bottom: 2rem; }
.wallet-header h2 { font-size: 1.25rem; font-weight: 700; }
.tabs { display: flex; gap: 0.25rem; background: var(--gray-100); padding: 0.25rem; border-radius: 0.5rem; margin-bottom: 2rem; }
.tab { flex: 1; padding: 0.75rem 1rem; background: transparent; color: var(--gray-600); border-radius: 0.375rem; font-weight: 500; }
.tab:hover { color: var(--ink); }
.tab.active { background: var(--paper); color: var(--ink); box-shadow: 0 1px 2px rgba(0, 0, 0, 0.06); }
.tab-count { margin-left: 0.5rem; background: var(--gray-200); padding: 0.1rem 0.5rem; border-radius: 999px; font-size: 0.75rem; }

.nft-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); gap: 1.5rem; }
.nft-card { border: 1px solid var(--gray-200); border-radius: 0.5rem; overflow: hidden; }
.nft-card img { width: 100%; aspect-ratio: 1; object-fit: cover; }
.nft-card-body { padding: 1rem; }
.nft-card-head { display: flex; justify-content: space-between; align-items: center; margin-bottom: 0.5rem; }
.nft-card-head h3 { font-weight: 600; }
.nft-card-body p { color: var(--gray-600); font-size: 0.875rem; margin-bottom: 0.75rem; }
.nft-meta { font-size: 0.75rem; color: var(--gray-600); }
.badge { font-size: 0.75rem; font-weight: 600; padding: 0.15rem 0.5rem; border-radius: 999px; text-transform: capitalize; }
.card-actions { display: flex; gap: 0.5rem; margin-top: 1rem; }
.card-actions .btn { flex: 1; }

.mint-panel { max-width: 40rem; margin: 0 auto; text-align: center; }
.mint-terms { display: grid; grid-template-columns: repeat(2, 1fr); gap: 1rem; text-align: left; margin: 1.5rem 0; font-size: 0.875rem; }
.mint-terms span { font-weight: 500; display: block; }
.benefits { text-align: left; background: var(--paper-dim); padding: 1.5rem; border-radius: 0.5rem; margin-bottom: 1.5rem; font-size: 0.875rem; }
.benefits ul { list-style: none; margin-top: 0.5rem; }
.benefits li { color: var(--gray-600); padding: 0.15rem 0; }

.tx-list { display: flex; flex-direction: column; gap: 1rem; }
.tx-row { display: flex; justify-content: space-between; align-items: center; border: 1px solid var(--gray-200); padding: 1rem; border-radius: 0.5rem; }
.tx-tags { display: flex; gap: 0.5rem; margin-bottom: 0.25rem; }
.tx-row small { color: var(--gray-600); }
.tx-link { text-align: right; font-size: 0.875rem; }
.tx-link a { text-decoration: underline; }
.tx-link div { font-family: var(--font-mono); font-size: 0.75rem; color: var(--gray-600); }

.connect-panel { max-width: 32rem; margin: 0 auto; text-align: center; }
.connect-panel ul { list-style: none; color: var(--gray-600); font-size: 0.875rem; }
.banner { display: flex; justify-content: space-between; align-items: center; padding: 0.75rem 1rem; border-radius: 0.375rem; margin-bottom: 1.5rem; font-size: 0.875rem; }
.banner--error { background: #fef2f2; color: var(--danger); }
.banner--success { background: #f0fdf4; color: var(--success); }
.banner button { background: transparent; color: inherit; font-size: 1.25rem; }

.steps-list { display: flex; flex-direction: column; gap: 0.75rem; }
.steps-list-item { display: flex; gap: 0.75rem; align-items: flex-start; }
.steps-list-num { width: 1.5rem; height: 1.5rem; background: var(--ink); color: var(--paper); border-radius: 50%; display: flex; align-items: center; justify-content: center; font-size: 0.75rem; font-weight: 700; flex-shrink: 0; }
.steps-list-item p { color: var(--gray-600); font-size: 0.875rem; }
"#;
