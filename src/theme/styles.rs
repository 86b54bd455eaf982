//! Global CSS styles for JPM Console.
//!
//! Colour tokens are scoped under `.dark` / `.light`, the classes the theme
//! scope carries. Layout helpers mirror the utility class names used in markup.

pub const GLOBAL_STYLES: &str = r#"
/* === Theme tokens === */
.light {
  --background: #ffffff;
  --foreground: #09090b;
  --primary: #18181b;
  --primary-foreground: #fafafa;
  --secondary: #f4f4f5;
  --secondary-foreground: #18181b;
  --accent: #f4f4f5;
  --accent-foreground: #18181b;
  --destructive: #ef4444;
  --destructive-foreground: #fafafa;
  --border: #e4e4e7;
  --ring: #18181b;
  color-scheme: light;
}

.dark {
  --background: #09090b;
  --foreground: #fafafa;
  --primary: #fafafa;
  --primary-foreground: #18181b;
  --secondary: #27272a;
  --secondary-foreground: #fafafa;
  --accent: #27272a;
  --accent-foreground: #fafafa;
  --destructive: #7f1d1d;
  --destructive-foreground: #fafafa;
  --border: #27272a;
  --ring: #d4d4d8;
  color-scheme: dark;
}

:root {
  --radius: 0.5rem;
  --font-sans: system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif;
  --transition-fast: 150ms ease;
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
  -moz-osx-font-smoothing: grayscale;
}

body {
  font-family: var(--font-sans);
  min-height: 100vh;
}

.theme-scope {
  background: var(--background);
  color: var(--foreground);
  min-height: 100vh;
}

/* === Layout utilities === */
.flex { display: flex; }
.flex-col { flex-direction: column; }
.items-center { align-items: center; }
.justify-center { justify-content: center; }
.min-h-svh { min-height: 100svh; }

/* === Buttons === */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  white-space: nowrap;
  border: 1px solid transparent;
  border-radius: var(--radius);
  font-family: inherit;
  font-size: 0.875rem;
  font-weight: 500;
  cursor: pointer;
  transition: background var(--transition-fast), color var(--transition-fast);
}

.btn:focus-visible {
  outline: 2px solid var(--ring);
  outline-offset: 2px;
}

.btn:disabled {
  pointer-events: none;
  opacity: 0.5;
}

.btn-default {
  background: var(--primary);
  color: var(--primary-foreground);
}

.btn-default:hover { opacity: 0.9; }

.btn-destructive {
  background: var(--destructive);
  color: var(--destructive-foreground);
}

.btn-destructive:hover { opacity: 0.9; }

.btn-outline {
  background: var(--background);
  border-color: var(--border);
  color: var(--foreground);
}

.btn-outline:hover,
.btn-ghost:hover {
  background: var(--accent);
  color: var(--accent-foreground);
}

.btn-secondary {
  background: var(--secondary);
  color: var(--secondary-foreground);
}

.btn-secondary:hover { opacity: 0.8; }

.btn-ghost {
  background: transparent;
  color: var(--foreground);
}

.btn-link {
  background: transparent;
  color: var(--primary);
  text-underline-offset: 4px;
}

.btn-link:hover { text-decoration: underline; }

.btn-size-default { height: 2.25rem; padding: 0.5rem 1rem; }
.btn-size-sm { height: 2rem; padding: 0 0.75rem; font-size: 0.75rem; }
.btn-size-lg { height: 2.5rem; padding: 0 2rem; }
.btn-size-icon { height: 2.25rem; width: 2.25rem; }
"#;
