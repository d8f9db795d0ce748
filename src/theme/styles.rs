//! Global CSS for Keepsake.
//!
//! One stylesheet string injected at the app root, shared by the public
//! page and the admin panel.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* CREAM (Backgrounds) */
  --cream: #fdf8f4;
  --cream-darker: #f6ece4;
  --cream-border: #eadfd5;

  /* ROSE (Hearts, Accents, Actions) */
  --rose: #c96f6f;
  --rose-deep: #a94c4c;
  --rose-soft: rgba(201, 111, 111, 0.15);

  /* GOLD (Dates, Numbers, Highlights) */
  --gold: #b08d57;
  --gold-glow: rgba(176, 141, 87, 0.25);

  /* TEXT */
  --ink: #3c3430;
  --ink-secondary: rgba(60, 52, 48, 0.7);
  --ink-muted: rgba(60, 52, 48, 0.45);

  /* SEMANTIC */
  --success: #5f8a5f;
  --danger: #c0392b;

  /* OVERLAY */
  --night: #1d1715;
  --night-veil: rgba(29, 23, 21, 0.92);

  /* Typography */
  --font-serif: 'Cormorant Garamond', Georgia, serif;
  --font-sans: 'Inter', 'Segoe UI', sans-serif;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-slow: 600ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-sans);
  background: var(--cream);
  color: var(--ink);
  line-height: 1.6;
}

h1, h2, h3 { font-family: var(--font-serif); font-weight: 600; }

button { font-family: inherit; cursor: pointer; }
input, textarea { font-family: inherit; font-size: 1rem; }

/* === Layout === */
.public-page, .admin-page {
  max-width: 1200px;
  margin: 0 auto;
  padding: 0 24px;
}

.counter-section, .timeline-section, .gallery-section,
.reasons-section, .music-section, .letter-section { padding: 4rem 0; }

.section-title {
  font-size: 2.2rem;
  text-align: center;
  color: var(--rose-deep);
  margin-bottom: 2.5rem;
}

.empty-state {
  text-align: center;
  color: var(--ink-muted);
  padding: 2rem 0;
}

.page-loading {
  min-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
}

/* === Hero === */
.hero {
  min-height: 70vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  text-align: center;
  gap: 1.2rem;
}
.hero-title { font-size: 3.2rem; color: var(--rose-deep); }
.hero-subtitle { font-size: 1.2rem; color: var(--ink-secondary); }
.hero-scroll {
  margin-top: 1rem;
  width: 48px; height: 48px;
  font-size: 1.3rem;
  border: none;
  border-radius: 50%;
  background: var(--rose);
  color: #fff;
  transition: background var(--transition-fast), transform var(--transition-fast);
}
.hero-scroll:hover { background: var(--rose-deep); transform: translateY(2px); }

/* === Live counter === */
.counter-grid {
  display: flex;
  justify-content: center;
  gap: 1.5rem;
  flex-wrap: wrap;
}
.counter-cell {
  background: #fff;
  border: 1px solid var(--cream-border);
  border-radius: 16px;
  padding: 1.4rem 1.8rem;
  min-width: 110px;
  text-align: center;
  box-shadow: 0 6px 20px rgba(60, 52, 48, 0.06);
}
.counter-value {
  display: block;
  font-family: var(--font-serif);
  font-size: 2.6rem;
  color: var(--gold);
  animation: pop var(--transition-normal);
}
@keyframes pop {
  from { opacity: 0.3; transform: translateY(-4px); }
  to { opacity: 1; transform: none; }
}
.counter-label { font-size: 0.85rem; color: var(--ink-muted); letter-spacing: 0.08em; text-transform: uppercase; }
.counter-caption { text-align: center; margin-top: 1.6rem; color: var(--ink-muted); font-style: italic; }

/* === Timeline === */
.timeline { position: relative; max-width: 760px; margin: 0 auto; }
.timeline::before {
  content: '';
  position: absolute;
  left: 50%;
  top: 0; bottom: 0;
  width: 2px;
  background: var(--cream-border);
}
.timeline-entry {
  position: relative;
  width: 46%;
  margin-bottom: 2.4rem;
}
.timeline-entry.left { margin-right: auto; }
.timeline-entry.right { margin-left: auto; }
.timeline-card {
  background: #fff;
  border: 1px solid var(--cream-border);
  border-radius: 12px;
  padding: 1.2rem 1.4rem;
}
.timeline-dot {
  position: absolute;
  top: 1.4rem;
  width: 12px; height: 12px;
  border-radius: 50%;
  background: var(--rose);
}
.timeline-entry.left .timeline-dot { right: calc(-8.7% - 6px); }
.timeline-entry.right .timeline-dot { left: calc(-8.7% - 6px); }
.timeline-date { color: var(--gold); font-size: 0.9rem; margin-bottom: 0.3rem; display: block; }
.timeline-title { font-size: 1.3rem; margin-bottom: 0.4rem; }
.timeline-text { color: var(--ink-secondary); font-size: 0.95rem; }

/* === Masonry gallery === */
.masonry-grid {
  display: flex;
  gap: 12px;
  align-items: flex-start;
  justify-content: center;
}
.masonry-column {
  display: flex;
  flex-direction: column;
  gap: 12px;
}
.masonry-column.clamped { overflow: hidden; }
.masonry-item {
  display: block;
  width: 100%;
  height: auto;
  border-radius: 12px;
  cursor: pointer;
  transition: transform var(--transition-fast);
}
.masonry-item:hover { transform: scale(1.02); }

/* === Lightbox === */
.lightbox-overlay {
  position: fixed;
  inset: 0;
  z-index: 60;
  background: var(--night-veil);
  display: flex;
  align-items: center;
  justify-content: center;
}
.lightbox-body { position: relative; text-align: center; }
.lightbox-image {
  max-width: 90vw;
  max-height: 85vh;
  border-radius: 8px;
}
.lightbox-caption { color: rgba(253, 248, 244, 0.8); margin-top: 0.6rem; }
.lightbox-close {
  position: fixed;
  top: 1.2rem; right: 1.6rem;
  background: none;
  border: none;
  color: #fff;
  font-size: 2rem;
}
.lightbox-nav {
  position: fixed;
  top: 50%;
  transform: translateY(-50%);
  background: none;
  border: none;
  color: #fff;
  font-size: 3rem;
  padding: 0 1rem;
}
.lightbox-nav.prev { left: 0.6rem; }
.lightbox-nav.next { right: 0.6rem; }

/* === Flip cards === */
.reasons-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
  gap: 1.2rem;
}
.flip-card { perspective: 900px; height: 180px; cursor: pointer; }
.flip-card-inner {
  position: relative;
  width: 100%; height: 100%;
  transition: transform var(--transition-slow);
  transform-style: preserve-3d;
}
.flip-card.flipped .flip-card-inner { transform: rotateY(180deg); }
.flip-card-front, .flip-card-back {
  position: absolute;
  inset: 0;
  backface-visibility: hidden;
  border-radius: 14px;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  padding: 1rem;
  text-align: center;
}
.flip-card-front {
  background: #fff;
  border: 1px solid var(--cream-border);
}
.flip-card-back {
  background: var(--rose);
  color: #fff;
  transform: rotateY(180deg);
}
.flip-card-number { font-family: var(--font-serif); font-size: 1.6rem; color: var(--rose-deep); }
.flip-card-heart { color: var(--rose); margin-top: 0.4rem; }

/* === Music embed === */
.music-embed { border: none; border-radius: 14px; width: 100%; }
.music-placeholder {
  border: 1px dashed var(--cream-border);
  border-radius: 14px;
  padding: 3rem 1rem;
  text-align: center;
  color: var(--ink-muted);
}
.music-note { font-size: 2rem; display: block; margin-bottom: 0.6rem; }

/* === Secret letter === */
.letter-section { text-align: center; }
.letter-hint { margin-bottom: 1.2rem; color: var(--ink-muted); font-size: 0.9rem; }
.hold-btn {
  position: relative;
  overflow: hidden;
  padding: 1rem 2.8rem;
  font-size: 1.05rem;
  border: 2px solid var(--rose);
  border-radius: 999px;
  background: #fff;
  color: var(--rose-deep);
  user-select: none;
  -webkit-user-select: none;
}
.hold-btn-label { position: relative; z-index: 1; }
.hold-progress {
  position: absolute;
  left: 0; top: 0; bottom: 0;
  background: var(--rose-soft);
  pointer-events: none;
  transition: none;
}

.letter-modal {
  background: var(--cream);
  border-radius: 14px;
  max-width: 620px;
  max-height: 80vh;
  overflow-y: auto;
  padding: 2.4rem;
  font-family: var(--font-serif);
  font-size: 1.15rem;
  text-align: left;
}
.letter-modal-title { margin-bottom: 1.2rem; color: var(--rose-deep); }
.letter-paragraph { margin-bottom: 1rem; }

/* === Countdown overlay === */
.countdown-overlay {
  position: fixed;
  inset: 0;
  z-index: 100;
  background: var(--night);
  color: var(--cream);
  display: flex;
  align-items: center;
  justify-content: center;
  text-align: center;
}
.countdown-content { padding: 1.5rem; }
.countdown-heart { font-size: 3rem; margin-bottom: 1rem; }
.countdown-title { font-size: 2.2rem; margin-bottom: 0.6rem; }
.countdown-subtitle { color: rgba(253, 248, 244, 0.7); margin-bottom: 2rem; }
.countdown-timer { display: flex; justify-content: center; gap: 1.4rem; margin-bottom: 2rem; }
.countdown-item { min-width: 90px; }
.countdown-number {
  display: block;
  font-family: var(--font-serif);
  font-size: 2.8rem;
  color: var(--gold);
}
.countdown-label { font-size: 0.8rem; letter-spacing: 0.1em; text-transform: uppercase; color: rgba(253, 248, 244, 0.6); }
.countdown-message { color: var(--rose); }

/* === Admin: login === */
.login-card {
  background: #fff;
  border: 1px solid var(--cream-border);
  border-radius: 16px;
  padding: 2.4rem;
  width: 380px;
  max-width: 100%;
  margin: 14vh auto 0;
  box-shadow: 0 10px 30px rgba(60, 52, 48, 0.08);
}
.login-title { text-align: center; margin-bottom: 1.6rem; color: var(--rose-deep); font-size: 1.8rem; }

.form-group { margin-bottom: 1rem; }
.form-group label { display: block; font-size: 0.85rem; color: var(--ink-secondary); margin-bottom: 0.3rem; }
.form-group input, .form-group textarea {
  width: 100%;
  padding: 0.65rem 0.8rem;
  border: 1px solid var(--cream-border);
  border-radius: 8px;
  background: var(--cream);
}
.form-group textarea { min-height: 140px; resize: vertical; }
.form-error { color: var(--danger); font-size: 0.9rem; margin-bottom: 0.8rem; }
.form-actions { display: flex; gap: 0.6rem; }

/* === Admin: chrome === */
.admin-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1.2rem 0;
  border-bottom: 1px solid var(--cream-border);
  margin-bottom: 1.6rem;
}
.admin-header-actions { display: flex; gap: 0.6rem; align-items: center; }
.admin-user-email { color: var(--ink-muted); font-size: 0.9rem; margin-right: 0.6rem; }
.nav-tabs { display: flex; gap: 0.6rem; margin-bottom: 1.6rem; flex-wrap: wrap; }
.nav-tab {
  padding: 0.55rem 1.2rem;
  border: 1px solid var(--cream-border);
  border-radius: 999px;
  background: #fff;
  color: var(--ink-secondary);
}
.nav-tab.active { background: var(--rose); border-color: var(--rose); color: #fff; }
.admin-content { padding-bottom: 3rem; }
.manager-panel { display: flex; flex-direction: column; gap: 1.2rem; }

/* === Admin: lists === */
.item-list { display: flex; flex-direction: column; gap: 0.8rem; }
.list-item {
  display: flex;
  align-items: flex-start;
  justify-content: space-between;
  gap: 1rem;
  background: #fff;
  border: 1px solid var(--cream-border);
  border-radius: 12px;
  padding: 1rem 1.2rem;
}
.list-item-body { flex: 1; }
.list-item-date { color: var(--gold); font-size: 0.85rem; display: block; }
.list-item-order { color: var(--gold); font-family: var(--font-serif); font-size: 1.2rem; margin-right: 0.6rem; }
.list-item-actions { display: flex; gap: 0.5rem; flex-shrink: 0; }

.gallery-admin-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(160px, 1fr));
  gap: 0.8rem;
}
.gallery-admin-item { position: relative; border-radius: 10px; overflow: hidden; }
.gallery-admin-item img { display: block; width: 100%; height: 160px; object-fit: cover; }
.gallery-admin-item .btn {
  position: absolute;
  bottom: 0.5rem; right: 0.5rem;
  opacity: 0;
  transition: opacity var(--transition-fast);
}
.gallery-admin-item:hover .btn { opacity: 1; }

.upload-area {
  border: 2px dashed var(--cream-border);
  border-radius: 14px;
  padding: 2.4rem;
  text-align: center;
  color: var(--ink-muted);
  transition: border-color var(--transition-fast);
}
.upload-area:hover { border-color: var(--rose); }
.upload-progress {
  position: relative;
  height: 20px;
  border-radius: 10px;
  background: var(--cream-darker);
  margin-top: 1rem;
  overflow: hidden;
  font-size: 0.75rem;
  line-height: 20px;
}
.upload-progress-bar { position: absolute; left: 0; top: 0; bottom: 0; background: var(--rose-soft); transition: width var(--transition-fast); }
.upload-progress span { position: relative; color: var(--ink-secondary); }

/* === Buttons === */
.btn {
  padding: 0.6rem 1.3rem;
  border-radius: 8px;
  border: none;
  background: var(--rose);
  color: #fff;
  transition: background var(--transition-fast);
}
.btn:hover { background: var(--rose-deep); }
.btn:disabled { opacity: 0.55; cursor: default; }
.btn-primary { background: var(--rose); }
.btn-primary:hover { background: var(--rose-deep); }
.btn-secondary { background: transparent; border: 1px solid var(--cream-border); color: var(--ink-secondary); }
.btn-secondary:hover { background: var(--cream-darker); }
.btn-small { padding: 0.35rem 0.9rem; font-size: 0.85rem; }
.btn-danger { background: var(--danger); }
.btn-danger:hover { background: #992d22; }

/* === Modals === */
.modal-overlay {
  position: fixed;
  inset: 0;
  z-index: 70;
  background: var(--night-veil);
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 1.5rem;
}
.modal-card {
  background: var(--cream);
  border-radius: 14px;
  padding: 1.8rem;
  width: 460px;
  max-width: 100%;
}
.modal-card h3 { margin-bottom: 1.2rem; color: var(--rose-deep); }
.modal-actions { display: flex; justify-content: flex-end; gap: 0.6rem; margin-top: 1.2rem; }

/* === Toasts === */
.toast-container {
  position: fixed;
  bottom: 1.4rem;
  right: 1.4rem;
  z-index: 90;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}
.toast {
  padding: 0.7rem 1.2rem;
  border-radius: 10px;
  color: #fff;
  box-shadow: 0 6px 18px rgba(29, 23, 21, 0.2);
}
.toast-success { background: var(--success); }
.toast-error { background: var(--danger); }

/* === Settings cards === */
.settings-card {
  background: #fff;
  border: 1px solid var(--cream-border);
  border-radius: 12px;
  padding: 1.4rem;
}
.settings-card h3 { margin-bottom: 1rem; }
.settings-hint { color: var(--ink-muted); font-size: 0.9rem; margin-bottom: 0.8rem; }

.loading-spinner {
  width: 28px; height: 28px;
  margin: 2rem auto;
  border: 3px solid var(--cream-border);
  border-top-color: var(--rose);
  border-radius: 50%;
  animation: spin 0.8s linear infinite;
}
@keyframes spin { to { transform: rotate(360deg); } }

.site-footer {
  text-align: center;
  padding: 2.5rem 0;
  color: var(--ink-muted);
  font-size: 0.85rem;
}
.footer-admin-link { color: var(--ink-muted); text-decoration: none; }
"#;
