#[cfg(test)]
mod verify {
    use snipfmt::formatting::*;

    #[test]
    fn competitive_programming_snippets() {
        let cases = [
            ("if(x<n)", "if (x < n)"),
            ("for(int i=0;i<n;i++)", "for (int i = 0; i < n; i++)"),
            ("while(hh<=tt)", "while (hh <= tt)"),
            ("int n=q.front();", "int n = q.front();"),
            ("memset(h,-1,sizeof h);", "memset(h, -1, sizeof h);"),
            (
                "dp[i][j]=max(dp[i-1][j],dp[i][j-1]);",
                "dp[i][j] = max(dp[i - 1][j], dp[i][j - 1]);",
            ),
            ("cout<<\"a<b\"<<endl;", "cout << \"a<b\" << endl;"),
            ("x=l+r>>1;", "x = l + r >> 1;"),
        ];

        for (input, expected) in cases {
            assert_eq!(format_fragment(input), expected, "input {:?}", input);
        }
    }

    #[test]
    fn template_declarations() {
        let cases = [
            ("vector<int>v(n,0);", "vector<int> v(n, 0);"),
            ("vector<vector<int>>v;", "vector<vector<int>> v;"),
            ("map<string,int>mp;", "map<string, int> mp;"),
            (
                "priority_queue<int, vector<int>, greater<int>>pq;",
                "priority_queue<int, vector<int>, greater<int>> pq;",
            ),
            ("vector<Node*>g(n);", "vector<Node*> g(n);"),
        ];

        for (input, expected) in cases {
            assert_eq!(format_fragment(input), expected, "input {:?}", input);
        }
    }

    #[test]
    fn multi_line_function() {
        let input = "\
int find(int x) {
    if(p[x]!=x) p[x]=find(p[x]);
    return p[x];
}";
        let expected = "\
int find(int x) {
    if (p[x] != x) p[x] = find(p[x]);
    return p[x];
}";
        assert_eq!(format_fragment(input), expected);
    }

    #[test]
    fn structure_is_never_changed() {
        let input = "\
#include <bits/stdc++.h>
using namespace std;

int main() {
    int n;
    scanf(\"%d\",&n);
    return 0;
}";
        let result = format_fragment(input);
        assert_eq!(
            result
                .lines()
                .count(),
            input
                .lines()
                .count()
        );
        assert!(result.contains("#include <bits/stdc++.h>"));
        assert!(result.contains("scanf(\"%d\", &n);"));
    }

    #[test]
    fn already_formatted_code_survives() {
        let input = "\
for (int i = 0; i < n; i++) {
    sum += a[i];
}";
        assert_eq!(format_fragment(input), input);
    }
}
