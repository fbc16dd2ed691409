use crate::domain::matched_chain::MatchedChain;

const HEADER: &str = "{/* Generated by chain-table-docgen. Do not edit by hand. */}\n";

/// Renders the supported-chains table as an MDX component definition.
///
/// The output only depends on `chains`, so identical inputs render identical bytes.
pub fn render_table(chains: &[MatchedChain]) -> String {
    let rows: String = chains.iter().map(render_row).collect();

    format!(
        r#"{HEADER}
export const SupportedChainsTable = () => (
  <table>
    <thead>
      <tr>
        <th>Chain</th>
        <th>Chain ID</th>
        <th>Deposit Fee</th>
        <th>Withdrawal Fee</th>
        <th>Token Support</th>
      </tr>
    </thead>
    <tbody>
{rows}    </tbody>
  </table>
);
"#
    )
}

fn render_row(chain: &MatchedChain) -> String {
    format!(
        r#"      <tr>
        <td>{name}</td>
        <td>{id}</td>
        <td>{deposit_fee}</td>
        <td>{withdrawal_fee}</td>
        <td>{token_support}</td>
      </tr>
"#,
        name = escape(&chain.name),
        id = chain.id,
        deposit_fee = escape(&chain.deposit_fee),
        withdrawal_fee = escape(&chain.withdrawal_fee),
        token_support = escape(&chain.token_support),
    )
}

/// Escapes characters that would be read as markup or JSX expressions.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '{' => escaped.push_str("&#123;"),
            '}' => escaped.push_str("&#125;"),
            c => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(id: u64, name: &str, token_support: &str) -> MatchedChain {
        MatchedChain {
            id,
            name: name.to_string(),
            deposit_fee: "0 BPS".to_string(),
            withdrawal_fee: "1 BPS".to_string(),
            token_support: token_support.to_string(),
        }
    }

    #[test]
    fn test_render_row() {
        let row = render_row(&chain(8453, "Base", "Limited (ETH, USDC)"));

        assert_eq!(
            row,
            "      <tr>\n        <td>Base</td>\n        <td>8453</td>\n        <td>0 BPS</td>\n        <td>1 BPS</td>\n        <td>Limited (ETH, USDC)</td>\n      </tr>\n"
        );
    }

    #[test]
    fn test_render_table_keeps_row_order() {
        let output = render_table(&[chain(42161, "Arbitrum", "All"), chain(8453, "Base", "All")]);

        assert!(output.starts_with(HEADER));
        assert!(output.contains("export const SupportedChainsTable = () => ("));
        let arbitrum = output.find("<td>Arbitrum</td>").unwrap();
        let base = output.find("<td>Base</td>").unwrap();
        assert!(arbitrum < base);
        assert!(output.ends_with("    </tbody>\n  </table>\n);\n"));
    }

    #[test]
    fn test_render_empty_table() {
        let output = render_table(&[]);

        assert!(output.contains("    <tbody>\n    </tbody>\n"));
        assert!(!output.contains("<td>"));
    }

    #[test]
    fn test_escapes_markup() {
        let output = render_table(&[chain(1, "A&B <{test}>", "All")]);

        assert!(output.contains("<td>A&amp;B &lt;&#123;test&#125;&gt;</td>"));
    }
}
