use crate::{
    ast::{Template, Token},
    environment::Environment,
};

/// Expands `template` against the bindings in `env`.
///
/// Template tokens whose text names a bound capture are replaced by the
/// captured tokens; all other tokens, delimiters included, are copied as is.
/// Every newline of the template is followed by `indent` spaces so that
/// continuation lines line up with the code being replaced.
///
/// # Examples
///
/// ```
/// use tokpatch::{compile_template, lexer::tokenize, Environment};
/// use tokpatch::output::render;
/// use tokpatch::transform::substitute;
///
/// let mut env = Environment::new();
/// env.bind("dev", tokenize("device"));
///
/// let template = compile_template("rtcNewScene(dev);\nrtcCommitScene(scene);");
/// let tokens = substitute(&env, &template, 4);
/// assert_eq!(render(&tokens), "rtcNewScene(device);\n    rtcCommitScene(scene);");
/// ```
pub fn substitute(env: &Environment, template: &Template, indent: usize) -> Vec<Token> {
    let mut result = Vec::with_capacity(template.tokens().len());

    for token in template.tokens() {
        match env.get(token.text()) {
            Some(bound) => result.extend_from_slice(bound),
            None => result.push(token.clone()),
        }

        if token.is_newline() && indent != 0 {
            result.push(Token::spaces(indent));
        }
    }

    result
}
