//! Global CSS styles for Dinner Dossier.
//!
//! Classified-file aesthetic. Colours are CSS custom properties so the
//! light theme only has to override the palette under `[data-theme="light"]`.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root, [data-theme="dark"] {
  /* INK (Backgrounds) */
  --ink: #0b0d10;
  --ink-raised: #14181d;
  --ink-border: #262c33;

  /* SIGNAL (Stamps, warnings, clearance) */
  --signal: #e63946;
  --signal-glow: rgba(230, 57, 70, 0.35);

  /* TERMINAL (Status, access granted) */
  --terminal: #39ff14;
  --terminal-glow: rgba(57, 255, 20, 0.3);

  /* BRASS (Titles, rules) */
  --brass: #c9a227;
  --brass-glow: rgba(201, 162, 39, 0.3);

  /* TEXT */
  --text-primary: #eef1f4;
  --text-secondary: rgba(238, 241, 244, 0.72);
  --text-muted: rgba(238, 241, 244, 0.5);

  --grid-line: rgba(57, 255, 20, 0.6);
  --card-shadow: 0 12px 40px rgba(0, 0, 0, 0.55);
}

[data-theme="light"] {
  --ink: #f4efe4;
  --ink-raised: #fffaf0;
  --ink-border: #d8cfbd;

  --signal: #b3202c;
  --signal-glow: rgba(179, 32, 44, 0.2);

  --terminal: #1f7a1f;
  --terminal-glow: rgba(31, 122, 31, 0.2);

  --brass: #8a6a0c;
  --brass-glow: rgba(138, 106, 12, 0.2);

  --text-primary: #1d1f22;
  --text-secondary: rgba(29, 31, 34, 0.75);
  --text-muted: rgba(29, 31, 34, 0.5);

  --grid-line: rgba(29, 31, 34, 0.5);
  --card-shadow: 0 12px 32px rgba(60, 45, 20, 0.18);
}

:root {
  /* Typography */
  --font-display: 'Special Elite', 'Courier New', monospace;
  --font-mono: 'IBM Plex Mono', 'SF Mono', 'Consolas', monospace;

  /* Type Scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;
  --text-3xl: 3.5rem;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-flip: 700ms cubic-bezier(0.4, 0.2, 0.2, 1);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-mono);
  line-height: 1.6;
  min-height: 100vh;
}

.theme-root {
  background: var(--ink);
  color: var(--text-primary);
  min-height: 100vh;
  transition: background var(--transition-normal), color var(--transition-normal);
}

.app {
  position: relative;
  overflow-x: hidden;
  padding-bottom: 4rem;
}

.app > section {
  position: relative;
  z-index: 1;
  max-width: 1200px;
  margin: 0 auto;
  padding: 3rem 1.5rem;
}

/* === Theme Switch === */
.theme-switch-container {
  position: fixed;
  top: 1rem;
  right: 1rem;
  z-index: 10;
}

.theme-switch {
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: 50%;
  border: 1px solid var(--ink-border);
  background: var(--ink-raised);
  color: var(--brass);
  cursor: pointer;
  transition: transform var(--transition-fast), box-shadow var(--transition-fast);
}

.theme-switch:hover {
  transform: rotate(20deg);
  box-shadow: 0 0 16px var(--brass-glow);
}

/* === Background === */
.background-pattern {
  position: fixed;
  inset: 0;
  pointer-events: none;
  z-index: 0;
  overflow: hidden;
}

.grid-overlay {
  position: absolute;
  inset: 0;
  background-image:
    linear-gradient(var(--grid-line) 1px, transparent 1px),
    linear-gradient(90deg, var(--grid-line) 1px, transparent 1px);
}

.scan-effect {
  position: absolute;
  left: 0;
  right: 0;
  height: 120px;
  background: linear-gradient(to bottom, transparent, var(--terminal-glow), transparent);
  animation: scan 8s linear infinite;
}

@keyframes scan {
  from { top: -120px; }
  to { top: 100%; }
}

/* === Hero === */
.hero {
  text-align: center;
  min-height: 80vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 1.25rem;
}

.mission-badge {
  border: 2px solid var(--signal);
  padding: 0.4rem 1.2rem;
  transform: rotate(-2deg);
  box-shadow: 0 0 18px var(--signal-glow);
}

.badge-text {
  font-family: var(--font-display);
  color: var(--signal);
  letter-spacing: 0.25em;
  font-size: var(--text-sm);
}

.main-title {
  font-family: var(--font-display);
  font-size: var(--text-3xl);
  font-weight: 400;
  letter-spacing: 0.08em;
}

.glitch {
  position: relative;
  display: inline-block;
  color: var(--text-primary);
}

.glitch::before,
.glitch::after {
  content: attr(data-text);
  position: absolute;
  inset: 0;
  overflow: hidden;
}

.glitch::before {
  left: 2px;
  text-shadow: -2px 0 var(--signal);
  clip-path: inset(0 0 60% 0);
  animation: glitch-top 2.5s infinite linear alternate-reverse;
}

.glitch::after {
  left: -2px;
  text-shadow: 2px 0 var(--terminal);
  clip-path: inset(55% 0 0 0);
  animation: glitch-bottom 3s infinite linear alternate-reverse;
}

@keyframes glitch-top {
  0%, 90% { transform: translate(0); }
  92% { transform: translate(-3px, 1px); }
  96% { transform: translate(3px, -1px); }
  100% { transform: translate(0); }
}

@keyframes glitch-bottom {
  0%, 85% { transform: translate(0); }
  88% { transform: translate(2px, 2px); }
  94% { transform: translate(-2px, -1px); }
  100% { transform: translate(0); }
}

.subtitle {
  font-size: var(--text-lg);
  color: var(--text-secondary);
  max-width: 640px;
}

.tagline {
  font-style: italic;
  color: var(--brass);
}

.access-granted {
  margin-top: 1.5rem;
  font-family: var(--font-mono);
  color: var(--terminal);
  letter-spacing: 0.3em;
  text-shadow: 0 0 10px var(--terminal-glow);
}

.typing-effect span:first-child {
  display: inline-block;
  overflow: hidden;
  white-space: nowrap;
  animation: typing 2s steps(14) 0.5s both;
}

.cursor {
  animation: blink 1s step-end infinite;
}

@keyframes typing {
  from { width: 0; }
  to { width: 14ch; }
}

@keyframes blink {
  50% { opacity: 0; }
}

/* === Section Titles === */
.section-title {
  display: flex;
  align-items: center;
  gap: 1rem;
  font-family: var(--font-display);
  font-size: var(--text-2xl);
  font-weight: 400;
  color: var(--brass);
  letter-spacing: 0.15em;
  margin-bottom: 2rem;
  white-space: nowrap;
}

.title-line {
  flex: 1;
  height: 1px;
  background: linear-gradient(90deg, transparent, var(--brass), transparent);
}

/* === Mission Details === */
.mission-details-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
  gap: 1.5rem;
}

.mission-card {
  background: var(--ink-raised);
  border: 1px solid var(--ink-border);
  border-top: 3px solid var(--signal);
  box-shadow: var(--card-shadow);
}

.mission-card-header {
  padding: 1rem 1.25rem;
  border-bottom: 1px dashed var(--ink-border);
  font-family: var(--font-display);
  letter-spacing: 0.1em;
}

.mission-card-content {
  padding: 1.25rem;
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.mission-info-row {
  display: flex;
  justify-content: space-between;
  gap: 1rem;
}

.mission-info-row .label {
  color: var(--text-muted);
  font-size: var(--text-sm);
}

.mission-info-row .value {
  color: var(--text-primary);
  text-align: right;
}

.location-info h4,
.dress-code h4,
.previous-mission h4 {
  color: var(--brass);
  margin-bottom: 0.25rem;
}

.coordinates {
  color: var(--terminal);
  font-size: var(--text-sm);
}

.previous-mission .status {
  display: inline-block;
  margin-top: 0.4rem;
  padding: 0.1rem 0.5rem;
  border: 1px solid var(--terminal);
  color: var(--terminal);
  font-size: var(--text-xs);
  letter-spacing: 0.15em;
}

.menu-items {
  display: flex;
  flex-direction: column;
  gap: 0.6rem;
}

.menu-item {
  display: flex;
  flex-direction: column;
}

.menu-item .course {
  color: var(--text-muted);
  font-size: var(--text-xs);
  text-transform: uppercase;
  letter-spacing: 0.15em;
}

.menu-note {
  font-size: var(--text-sm);
  color: var(--signal);
}

/* === Agent Cards === */
.agents-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
  gap: 2rem;
}

.spy-card {
  height: 460px;
  perspective: 1200px;
  cursor: pointer;
  opacity: 0;
  transform: translateY(30px);
  transition: opacity 600ms ease, transform 600ms ease;
}

.spy-card.visible {
  opacity: 1;
  transform: translateY(0);
}

.card-inner {
  position: relative;
  width: 100%;
  height: 100%;
  transform-style: preserve-3d;
  transition: transform var(--transition-flip);
}

.spy-card.flipped .card-inner {
  transform: rotateY(180deg);
}

.card-front,
.card-back {
  position: absolute;
  inset: 0;
  backface-visibility: hidden;
  -webkit-backface-visibility: hidden;
  background: var(--ink-raised);
  border: 1px solid var(--ink-border);
  box-shadow: var(--card-shadow);
  overflow: hidden;
}

.card-back {
  transform: rotateY(180deg);
  padding: 1.25rem;
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.classification-badge {
  position: absolute;
  top: 0.75rem;
  left: 0.75rem;
  z-index: 2;
  padding: 0.15rem 0.6rem;
  background: var(--signal);
  color: #fff;
  font-size: var(--text-xs);
  letter-spacing: 0.15em;
}

.agent-image-container {
  position: relative;
  height: 240px;
  overflow: hidden;
}

.agent-image {
  width: 100%;
  height: 100%;
  object-fit: cover;
  filter: grayscale(0.7) contrast(1.1);
  transition: filter var(--transition-normal);
}

.spy-card:hover .agent-image {
  filter: grayscale(0) contrast(1);
}

.image-overlay {
  position: absolute;
  inset: 0;
  background: linear-gradient(to bottom, transparent 60%, var(--ink-raised));
}

.scan-line {
  position: absolute;
  left: 0;
  right: 0;
  height: 2px;
  background: var(--terminal);
  box-shadow: 0 0 8px var(--terminal);
  animation: card-scan 3s linear infinite;
}

@keyframes card-scan {
  from { top: 0; }
  to { top: 100%; }
}

.agent-info {
  padding: 1rem 1.25rem;
  display: flex;
  flex-direction: column;
  gap: 0.35rem;
}

.agent-status {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  font-size: var(--text-xs);
  color: var(--terminal);
  letter-spacing: 0.15em;
}

.status-dot {
  width: 8px;
  height: 8px;
  border-radius: 50%;
  background: var(--terminal);
  box-shadow: 0 0 10px var(--terminal-glow);
  animation: pulse 2s ease-in-out infinite;
}

@keyframes pulse {
  0%, 100% { opacity: 1; }
  50% { opacity: 0.4; }
}

.agent-name {
  font-family: var(--font-display);
  font-size: var(--text-xl);
  font-weight: 400;
}

.agent-codename {
  color: var(--brass);
  font-style: italic;
}

.agent-classification {
  color: var(--text-muted);
  font-size: var(--text-sm);
}

.tap-hint {
  margin-top: auto;
  font-size: var(--text-xs);
  color: var(--text-muted);
  letter-spacing: 0.2em;
  animation: pulse 2.5s ease-in-out infinite;
}

.dossier-header {
  border-bottom: 1px dashed var(--signal);
  padding-bottom: 0.5rem;
}

.dossier-header h3 {
  font-family: var(--font-display);
  color: var(--signal);
  letter-spacing: 0.15em;
  font-weight: 400;
}

.agent-id {
  font-size: var(--text-xs);
  color: var(--text-muted);
}

.stats-container {
  display: flex;
  flex-direction: column;
  gap: 0.6rem;
}

.stat-label {
  display: flex;
  justify-content: space-between;
  font-size: var(--text-xs);
  letter-spacing: 0.1em;
}

.stat-value {
  color: var(--terminal);
}

.stat-progress {
  height: 6px;
  background: var(--ink-border);
  overflow: hidden;
}

.stat-fill {
  height: 100%;
  background: linear-gradient(90deg, var(--brass), var(--signal));
  transition: width 900ms ease;
}

.specialties h4 {
  font-size: var(--text-xs);
  color: var(--text-muted);
  letter-spacing: 0.2em;
  margin-bottom: 0.4rem;
}

.specialty-tags {
  display: flex;
  flex-wrap: wrap;
  gap: 0.4rem;
}

.tag {
  padding: 0.1rem 0.5rem;
  border: 1px solid var(--brass);
  color: var(--brass);
  font-size: var(--text-xs);
}

.motto {
  margin-top: auto;
  font-style: italic;
  color: var(--text-secondary);
  font-size: var(--text-sm);
}

/* === Briefing === */
.briefing-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
  gap: 1.5rem;
}

.briefing-card {
  background: var(--ink-raised);
  border: 1px solid var(--ink-border);
  border-left: 3px solid var(--brass);
  padding: 1.25rem;
  box-shadow: var(--card-shadow);
}

.card-header {
  display: flex;
  justify-content: space-between;
  align-items: center;
  margin-bottom: 1rem;
  font-family: var(--font-display);
  letter-spacing: 0.1em;
}

.card-icon {
  font-size: var(--text-xl);
}

.briefing-list {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: 0.6rem;
}

.briefing-list li {
  display: flex;
  gap: 0.5rem;
  color: var(--text-secondary);
}

.bullet {
  color: var(--signal);
}

/* === Criteria === */
.criteria-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
  gap: 1.25rem;
}

.criterion-card {
  text-align: center;
  padding: 1.5rem 1rem;
  background: var(--ink-raised);
  border: 1px solid var(--ink-border);
  animation: rise-in 600ms ease both;
}

.criterion-icon {
  font-size: var(--text-2xl);
  margin-bottom: 0.5rem;
}

.criterion-card h3 {
  font-family: var(--font-display);
  font-weight: 400;
  color: var(--brass);
  margin-bottom: 0.4rem;
}

.criterion-card p {
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

@keyframes rise-in {
  from { opacity: 0; transform: translateY(20px); }
  to { opacity: 1; transform: translateY(0); }
}

/* === Footer === */
.footer {
  position: relative;
  z-index: 1;
  text-align: center;
  padding: 3rem 1.5rem 1rem;
  border-top: 1px dashed var(--ink-border);
}

.footer-content {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1rem;
}

.footer-mission {
  font-size: var(--text-2xl);
}

.footer-text {
  color: var(--text-muted);
}

.footer-stamp {
  border: 3px double var(--signal);
  color: var(--signal);
  padding: 0.3rem 1.2rem;
  font-family: var(--font-display);
  letter-spacing: 0.3em;
  transform: rotate(-6deg);
  opacity: 0.85;
}

/* === Loading Screen === */
.loading-screen {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 2rem;
}

.loading-radar {
  position: relative;
  width: 140px;
  height: 140px;
  border-radius: 50%;
  border: 1px solid var(--terminal);
  box-shadow: 0 0 24px var(--terminal-glow);
  overflow: hidden;
}

.loading-radar__sweep {
  position: absolute;
  inset: 0;
  background: conic-gradient(from 0deg, var(--terminal-glow), transparent 30%);
  animation: sweep 2s linear infinite;
}

.loading-radar__blip {
  position: absolute;
  top: 30%;
  left: 62%;
  width: 6px;
  height: 6px;
  border-radius: 50%;
  background: var(--terminal);
  animation: pulse 1s ease-in-out infinite;
}

@keyframes sweep {
  to { transform: rotate(360deg); }
}

.loading-message {
  color: var(--terminal);
  letter-spacing: 0.25em;
  text-transform: uppercase;
  font-size: var(--text-sm);
}

.loading-dots {
  animation: blink 1s step-end infinite;
}

/* === Not Found / Error === */
.not-found-page,
.error-fallback {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 1.25rem;
  text-align: center;
  padding: 2rem;
}

.not-found__code {
  font-family: var(--font-display);
  font-size: 6rem;
  color: var(--signal);
  text-shadow: 0 0 30px var(--signal-glow);
}

.not-found__title {
  font-family: var(--font-display);
  letter-spacing: 0.2em;
  font-weight: 400;
}

.not-found__text,
.error-fallback__detail {
  color: var(--text-muted);
}

.error-fallback__stamp {
  border: 3px double var(--signal);
  color: var(--signal);
  padding: 0.3rem 1.2rem;
  letter-spacing: 0.3em;
  transform: rotate(-4deg);
}

.btn-return {
  color: var(--brass);
  border: 1px solid var(--brass);
  padding: 0.5rem 1.25rem;
  text-decoration: none;
  letter-spacing: 0.1em;
  transition: box-shadow var(--transition-fast);
}

.btn-return:hover {
  box-shadow: 0 0 14px var(--brass-glow);
}

@media (max-width: 640px) {
  :root {
    --text-3xl: 2.25rem;
    --text-2xl: 1.5rem;
  }

  .section-title {
    white-space: normal;
  }
}

@media (prefers-reduced-motion: reduce) {
  *, *::before, *::after {
    animation-duration: 0.01ms !important;
    transition-duration: 0.01ms !important;
  }
}
"#;
