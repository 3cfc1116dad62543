/// Named substitution slots for the document template.
#[derive(Debug, Clone)]
pub struct DocumentParams {
    pub title: String,
    pub content: String,
    pub closing: String,
    pub margin_x: f64,
    pub margin_y: f64,
    pub cols: u32,
    pub gutter: String,
    pub indent: String,
}

/// The article wrapper the index body is typeset inside. Slots are plain
/// `${name}` markers; substitution performs no escaping.
const DOCUMENT_TEMPLATE: &str = r"
\documentclass{article}
\usepackage[top=${margin_y}in, bottom=${margin_y}in, right=${margin_x}in, left=${margin_x}in]{geometry}
\usepackage[utf8x]{inputenc}
\usepackage{multicol}
\usepackage[columns=${cols}, indentunit=${indent}, columnsep=${gutter}, font=footnotesize, justific=raggedright]{idxlayout}
\usepackage[sc, osf]{mathpazo}
\usepackage{titlesec}
%\renewcommand{\indexname}{\vskip -0.55in}

\begin{document}
\pagestyle{empty}
\begin{center}\large \textbf{${title}}\end{center}
\begin{theindex}
${content}
\end{theindex}

\vfill
\begin{center}\footnotesize \emph{${closing}}\end{center}
\end{document}
";

/// Substitutes the named slots into the document template and returns the
/// complete TeX source.
pub fn render_document(params: &DocumentParams) -> String {
    DOCUMENT_TEMPLATE
        .replace("${margin_x}", &params.margin_x.to_string())
        .replace("${margin_y}", &params.margin_y.to_string())
        .replace("${cols}", &params.cols.to_string())
        .replace("${gutter}", &params.gutter)
        .replace("${indent}", &params.indent)
        .replace("${title}", &params.title)
        .replace("${closing}", &params.closing)
        .replace("${content}", &params.content)
}
