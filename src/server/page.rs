// Single-page front end
//
// Markdown is rendered with marked and sanitized with DOMPurify, math with
// KaTeX auto-render. Math spans and escaped `\$` are swapped for placeholders
// before markdown runs; escaped dollars return as literal text after KaTeX.

pub const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Math AI Agent</title>
<link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/katex@0.16.9/dist/katex.min.css">
<script defer src="https://cdn.jsdelivr.net/npm/katex@0.16.9/dist/katex.min.js"></script>
<script defer src="https://cdn.jsdelivr.net/npm/katex@0.16.9/dist/contrib/auto-render.min.js"></script>
<script defer src="https://cdn.jsdelivr.net/npm/marked@12.0.0/marked.min.js"></script>
<script defer src="https://cdn.jsdelivr.net/npm/dompurify@3.0.8/dist/purify.min.js"></script>
<style>
  body { font-family: system-ui, sans-serif; margin: 0; display: flex; min-height: 100vh; }
  aside { width: 220px; background: #f4f5f7; padding: 1.5rem; }
  main { flex: 1; padding: 1.5rem 2rem; display: grid; grid-template-columns: 2fr 1fr; gap: 2rem; align-content: start; }
  textarea { width: 100%; height: 150px; font-size: 1rem; padding: .5rem; box-sizing: border-box; }
  button { cursor: pointer; }
  #solve { width: 100%; margin-top: .5rem; padding: .6rem; font-size: 1rem; background: #ff4b4b; color: #fff; border: 0; border-radius: 4px; }
  #solve:disabled { opacity: .6; cursor: wait; }
  .example { display: block; width: 100%; text-align: left; margin-bottom: .4rem; padding: .5rem; background: #fff; border: 1px solid #ddd; border-radius: 4px; }
  .banner { padding: .75rem 1rem; border-radius: 4px; margin: 1rem 0 .5rem; }
  .banner.success { background: #e6f4ea; color: #1e6b34; }
  .banner.warning { background: #fff8e1; color: #8a6d00; }
  .banner.error { background: #fdecea; color: #a12622; }
  .hint { background: #e8f0fe; color: #1a4d8f; }
  .hidden { display: none; }
  footer { grid-column: 1 / -1; border-top: 1px solid #ddd; padding-top: 1rem; color: #555; }
</style>
</head>
<body>
<aside>
  <h3>Supported Topics</h3>
  <ul>
    <li>Algebra</li><li>Geometry</li><li>Trigonometry</li>
    <li>Calculus</li><li>Arithmetic</li><li>Word Problems</li>
  </ul>
  <hr>
  <strong>Tips:</strong>
  <ul>
    <li>Be specific with your problem</li>
    <li>Include all given information</li>
    <li>Ask for help if stuck!</li>
  </ul>
</aside>
<main>
  <section>
    <h1>Math AI Agent</h1>
    <p><strong>Solve math problems with step-by-step explanations</strong></p>
    <h2>Enter Your Math Problem</h2>
    <textarea id="problem" placeholder="Enter your math problem here...&#10;&#10;Examples:&#10;- Solve for x: 2x + 5 = 13&#10;- Find the area of a circle with radius 7&#10;- What is the derivative of x² + 3x?"></textarea>
    <button id="solve">Solve Problem</button>
    <div id="banner" class="banner hidden"></div>
    <div id="hint" class="banner hint hidden"></div>
    <div id="result" class="hidden">
      <h2>Step-by-Step Solution</h2>
      <h3>Problem Statement</h3>
      <p id="statement"></p>
      <h3>Solution</h3>
      <div id="solution"></div>
    </div>
  </section>
  <section>
    <h2>Example Problems</h2>
    <div id="examples"></div>
  </section>
  <footer>
    <strong>Note:</strong> This AI agent specializes in mathematics.
    For best results, provide complete problem statements with all necessary information.
  </footer>
</main>
<script>
const $id = (id) => document.getElementById(id);

function show(el, text, cls) {
  el.textContent = text;
  el.className = "banner " + cls;
}

const DOLLAR = "@@DOLLAR@@";

function escapeHtml(text) {
  return text.replace(/&/g, "&amp;").replace(/</g, "&lt;").replace(/>/g, "&gt;");
}

function renderSolution(text) {
  const spans = [];
  const protectedText = text.replace(/(\\\$)|\$\$[\s\S]+?\$\$|\$[^$\n]+?\$/g, (m, escaped) => {
    if (escaped) return DOLLAR;
    spans.push(m);
    return "@@MATH" + (spans.length - 1) + "@@";
  });
  const markup = window.marked ? marked.parse(protectedText) : escapeHtml(protectedText);
  const safe = window.DOMPurify ? DOMPurify.sanitize(markup) : escapeHtml(protectedText);
  const target = $id("solution");
  target.innerHTML = safe.replace(/@@MATH(\d+)@@/g, (_, i) => escapeHtml(spans[Number(i)]));
  if (window.renderMathInElement) {
    renderMathInElement(target, {
      delimiters: [
        { left: "$$", right: "$$", display: true },
        { left: "$", right: "$", display: false },
      ],
      throwOnError: false,
    });
  }
  // Escaped dollars come back as plain text only after typesetting
  const walker = document.createTreeWalker(target, NodeFilter.SHOW_TEXT);
  for (let node = walker.nextNode(); node; node = walker.nextNode()) {
    if (node.nodeValue.includes(DOLLAR)) {
      node.nodeValue = node.nodeValue.split(DOLLAR).join("$");
    }
  }
}

async function solve() {
  const button = $id("solve");
  button.disabled = true;
  button.textContent = "Thinking through this problem...";
  $id("hint").className = "banner hint hidden";
  $id("result").className = "hidden";
  try {
    const res = await fetch("/api/solve", {
      method: "POST",
      headers: { "content-type": "application/json" },
      body: JSON.stringify({ problem: $id("problem").value }),
    });
    const body = await res.json();
    show($id("banner"), body.message, body.level);
    if (body.hint) show($id("hint"), body.hint, "hint");
    if (body.status === "solved") {
      $id("statement").textContent = body.problem;
      renderSolution(body.solution);
      $id("result").className = "";
    }
  } catch (err) {
    show($id("banner"), "An error occurred: " + err, "error");
  } finally {
    button.disabled = false;
    button.textContent = "Solve Problem";
  }
}

function sessionId() {
  let id = sessionStorage.getItem("mathagent-session");
  if (!id) {
    id = window.crypto && crypto.randomUUID
      ? crypto.randomUUID()
      : Date.now().toString(36) + Math.random().toString(36).slice(2);
    sessionStorage.setItem("mathagent-session", id);
  }
  return id;
}

async function pickExample(index) {
  const headers = { "x-session-id": sessionId() };
  await fetch("/api/examples/" + index + "/select", { method: "POST", headers });
  const res = await fetch("/api/examples/pending", { method: "POST", headers });
  const body = await res.json();
  if (body.problem) $id("problem").value = body.problem;
}

async function loadExamples() {
  const res = await fetch("/api/examples");
  const body = await res.json();
  body.examples.forEach((example, index) => {
    const b = document.createElement("button");
    b.className = "example";
    b.textContent = example;
    b.onclick = () => pickExample(index);
    $id("examples").appendChild(b);
  });
}

$id("solve").onclick = solve;
loadExamples();
</script>
</body>
</html>
"##;
