use net_worth_chart_wasm::domain::balance::{AccountBalance, transform_accounts};

#[test]
fn series_serialises_as_label_value_arrays() {
    let pairs = transform_accounts(&[
        AccountBalance::new("Checking", 1234.565),
        AccountBalance::new("Savings", 0.1 + 0.2),
    ]);
    insta::assert_json_snapshot!(pairs, @r###"
    [
      [
        "Checking",
        1234.57
      ],
      [
        "Savings",
        0.3
      ]
    ]
    "###);
}
